//! Resume rendering — walks the static resume record section by section and
//! drives the flow cursor. Section order is fixed: header, summary,
//! education, experience, projects, skills, awards (only when non-empty).

use crate::layout::flow::{DocumentFlow, FlowPage};
use crate::layout::font_metrics::{FontStyle, PageSetup};
use crate::resume::models::ResumeDocument;

// Role → size mapping. Name is largest, section titles stand out, body is
// the smallest readable size.
const NAME_PT: f32 = 22.0;
const TITLE_PT: f32 = 12.0;
const SECTION_PT: f32 = 12.0;
const ENTRY_PT: f32 = 11.0;
const BODY_PT: f32 = 9.0;

/// Lays out the full resume and returns the positioned pages.
pub fn layout_resume(resume: &ResumeDocument, setup: &PageSetup) -> Vec<FlowPage> {
    let mut flow = DocumentFlow::new(setup.clone());

    render_header(&mut flow, resume);

    section_title(&mut flow, "PROFESSIONAL SUMMARY");
    flow.text_block(&resume.summary, 10.0, FontStyle::Regular);
    flow.gap(5.0);

    section_title(&mut flow, "EDUCATION");
    for edu in &resume.education {
        flow.text_block(
            &format!("{} — {}", edu.degree, edu.institution),
            ENTRY_PT,
            FontStyle::Bold,
        );
        flow.text_block(
            &format!("{} | GPA: {} | Minors: {}", edu.period, edu.gpa, edu.minors),
            BODY_PT,
            FontStyle::Regular,
        );
        flow.text_block(
            &format!("Relevant Coursework: {}", edu.coursework.join(", ")),
            BODY_PT,
            FontStyle::Regular,
        );
        flow.gap(3.0);
    }
    flow.gap(3.0);

    section_title(&mut flow, "PROFESSIONAL EXPERIENCE");
    for exp in &resume.experience {
        flow.text_block(&exp.title, ENTRY_PT, FontStyle::Bold);
        flow.text_block(
            &format!("{} | {}", exp.company, exp.period),
            BODY_PT,
            FontStyle::Regular,
        );
        flow.gap(1.0);
        for responsibility in &exp.responsibilities {
            flow.text_block(&format!("• {responsibility}"), BODY_PT, FontStyle::Regular);
        }
        flow.gap(3.0);
    }
    flow.gap(3.0);

    section_title(&mut flow, "NOTABLE PROJECTS");
    for project in &resume.projects {
        let heading = match &project.award {
            Some(award) => format!("{} — {}", project.name, award),
            None => project.name.clone(),
        };
        flow.text_block(&heading, ENTRY_PT, FontStyle::Bold);
        flow.text_block(
            &format!("Technologies: {}", project.tech),
            BODY_PT,
            FontStyle::Regular,
        );
        flow.gap(1.0);
        for achievement in &project.achievements {
            flow.text_block(&format!("• {achievement}"), BODY_PT, FontStyle::Regular);
        }
        flow.gap(3.0);
    }
    flow.gap(3.0);

    section_title(&mut flow, "TECHNICAL SKILLS");
    let skills = &resume.skills;
    for (label, group) in [
        ("Languages", &skills.languages),
        ("Frameworks & Frontend", &skills.frameworks),
        ("Backend & Systems", &skills.backend),
        ("ML & Data", &skills.ml_data),
    ] {
        flow.text_block(
            &format!("{label}: {}", group.join(", ")),
            BODY_PT,
            FontStyle::Regular,
        );
    }
    flow.gap(3.0);

    if !resume.awards.is_empty() {
        section_title(&mut flow, "AWARDS & ACHIEVEMENTS");
        for award in &resume.awards {
            flow.text_block(&format!("• {award}"), BODY_PT, FontStyle::Regular);
        }
    }

    flow.into_pages()
}

fn render_header(flow: &mut DocumentFlow, resume: &ResumeDocument) {
    let info = &resume.personal_info;
    flow.text_block(&info.name, NAME_PT, FontStyle::Bold);
    flow.text_block(&info.title, TITLE_PT, FontStyle::Regular);

    let contact = [
        info.email.as_str(),
        info.phone.as_str(),
        info.location.as_str(),
        info.portfolio.as_str(),
        info.github.as_str(),
    ]
    .join(" | ");
    flow.text_block(&contact, BODY_PT, FontStyle::Regular);
    flow.gap(2.0);
    flow.rule();
    flow.gap(3.0);
}

fn section_title(flow: &mut DocumentFlow, title: &str) {
    flow.text_block(title, SECTION_PT, FontStyle::Bold);
    flow.gap(2.0);
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::default_page_setup;
    use crate::resume::data::resume_data;

    fn rendered_pages() -> Vec<FlowPage> {
        layout_resume(resume_data(), &default_page_setup())
    }

    fn all_lines(pages: &[FlowPage]) -> Vec<&str> {
        pages
            .iter()
            .flat_map(|p| p.lines.iter().map(|l| l.text.as_str()))
            .collect()
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let pages = rendered_pages();
        let lines = all_lines(&pages);
        let position = |needle: &str| {
            lines
                .iter()
                .position(|l| l.contains(needle))
                .unwrap_or_else(|| panic!("missing section: {needle}"))
        };

        let order = [
            position("Aniketh Mungara"),
            position("PROFESSIONAL SUMMARY"),
            position("EDUCATION"),
            position("PROFESSIONAL EXPERIENCE"),
            position("NOTABLE PROJECTS"),
            position("TECHNICAL SKILLS"),
            position("AWARDS & ACHIEVEMENTS"),
        ];
        assert!(order.windows(2).all(|w| w[0] < w[1]), "order was {order:?}");
    }

    #[test]
    fn test_name_uses_largest_bold_style() {
        let pages = rendered_pages();
        let name_line = pages[0]
            .lines
            .iter()
            .find(|l| l.text == "Aniketh Mungara")
            .expect("name line present");
        assert_eq!(name_line.style, FontStyle::Bold);
        assert!(pages
            .iter()
            .flat_map(|p| &p.lines)
            .all(|l| l.font_size_pt <= name_line.font_size_pt));
    }

    #[test]
    fn test_header_has_divider_rule() {
        let pages = rendered_pages();
        assert!(!pages[0].rules.is_empty());
    }

    #[test]
    fn test_project_award_appended_to_heading() {
        let pages = rendered_pages();
        assert!(all_lines(&pages)
            .iter()
            .any(|l| l.contains("CiteSight") && l.contains("Winner — SunHacks 2025")));
    }

    #[test]
    fn test_awards_section_skipped_when_empty() {
        let mut resume = resume_data().clone();
        resume.awards.clear();
        let pages = layout_resume(&resume, &default_page_setup());
        assert!(!all_lines(&pages)
            .iter()
            .any(|l| l.contains("AWARDS & ACHIEVEMENTS")));
    }

    #[test]
    fn test_no_line_crosses_bottom_margin() {
        let setup = default_page_setup();
        for page in rendered_pages() {
            for line in &page.lines {
                assert!(
                    line.y_mm + setup.line_advance_mm(line.font_size_pt)
                        <= setup.bottom_limit_mm() + 1e-3,
                    "line '{}' at y={} crosses the margin",
                    line.text,
                    line.y_mm
                );
            }
        }
    }
}
