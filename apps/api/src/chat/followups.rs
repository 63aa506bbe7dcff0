//! Parsing of the follow-up-questions reply into a bounded question list.
//!
//! The model is instructed to return one question per line without numbering,
//! but upstream phrasing drifts, so the transform is deliberately defensive:
//! split on line breaks, trim, drop blanks and enumerated lines, cap at 3.
//! Kept pure so it can be tested without a provider.

/// Maximum number of follow-up questions returned to the client.
pub const MAX_FOLLOW_UP_QUESTIONS: usize = 3;

/// Converts a raw follow-up reply into at most 3 clean question strings.
pub fn parse_follow_up_questions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_enumerated(line))
        .take(MAX_FOLLOW_UP_QUESTIONS)
        .map(str::to_string)
        .collect()
}

/// True for lines prefixed with a numeric enumeration marker ("1.", "12.").
fn is_enumerated(line: &str) -> bool {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && line[digits..].starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_reply_passes_through() {
        let raw = "What projects has Aniketh built?\nWhat is his GPA?\nHow can I contact him?";
        let questions = parse_follow_up_questions(raw);
        assert_eq!(
            questions,
            vec![
                "What projects has Aniketh built?",
                "What is his GPA?",
                "How can I contact him?"
            ]
        );
    }

    #[test]
    fn test_blank_lines_and_whitespace_dropped() {
        let raw = "\n  What about DevSync?  \n\n   \nWhat skills does he have?\n";
        let questions = parse_follow_up_questions(raw);
        assert_eq!(
            questions,
            vec!["What about DevSync?", "What skills does he have?"]
        );
        assert!(questions.iter().all(|q| !q.is_empty()));
    }

    #[test]
    fn test_enumerated_lines_dropped() {
        let raw = "1. What is his GPA?\n2. What about CiteSight?\nWhat else has he won?";
        let questions = parse_follow_up_questions(raw);
        assert_eq!(questions, vec!["What else has he won?"]);
    }

    #[test]
    fn test_multi_digit_enumeration_dropped() {
        let raw = "12. A stale question\nA real question?";
        assert_eq!(parse_follow_up_questions(raw), vec!["A real question?"]);
    }

    #[test]
    fn test_number_without_dot_is_kept() {
        // "3 projects" is content, not an enumeration marker
        let raw = "3 projects stand out — which should I ask about?";
        assert_eq!(parse_follow_up_questions(raw).len(), 1);
    }

    #[test]
    fn test_caps_at_three() {
        let raw = "q1?\nq2?\nq3?\nq4?\nq5?";
        let questions = parse_follow_up_questions(raw);
        assert_eq!(questions.len(), MAX_FOLLOW_UP_QUESTIONS);
        assert_eq!(questions, vec!["q1?", "q2?", "q3?"]);
    }

    #[test]
    fn test_empty_reply_yields_empty_list() {
        assert!(parse_follow_up_questions("").is_empty());
        assert!(parse_follow_up_questions("\n\n").is_empty());
    }
}
