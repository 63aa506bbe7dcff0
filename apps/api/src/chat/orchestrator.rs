//! Chat orchestration — transcript assembly, the primary answer call, and the
//! follow-up synthesis call.
//!
//! # Call shape
//! Two sequential provider calls per request: the answer call, then a
//! follow-up call that depends on the answer. A follow-up failure degrades to
//! an empty suggestion list; only a primary failure fails the request.

use serde::Serialize;
use tracing::warn;

use crate::chat::followups::parse_follow_up_questions;
use crate::chat::prompts::{ANSWER_SYSTEM, FOLLOW_UP_REQUEST, FOLLOW_UP_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::{ChatMessage, CompletionCall, CompletionService, LlmError};

/// Model for the primary answer call.
pub const ANSWER_MODEL: &str = "claude-3-5-sonnet-20241022";
/// Faster model for follow-up suggestions.
pub const FOLLOW_UP_MODEL: &str = "claude-3-5-haiku-20241022";

const ANSWER_MAX_TOKENS: u32 = 1024;
const FOLLOW_UP_MAX_TOKENS: u32 = 200;

/// A validated chat request: the new message plus prior turns in order.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub message: String,
    pub conversation_history: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: String,
    /// Opaque provider-issued identifier of the primary reply.
    pub conversation_id: String,
    pub follow_up_questions: Vec<String>,
}

/// Runs both completion calls for a validated request and shapes the result.
pub async fn answer_visitor(
    completions: &dyn CompletionService,
    request: &ChatRequest,
) -> Result<ChatResponse, AppError> {
    let transcript = build_transcript(request);

    let reply = completions
        .complete(CompletionCall {
            model: ANSWER_MODEL,
            max_tokens: ANSWER_MAX_TOKENS,
            system: ANSWER_SYSTEM.clone(),
            messages: transcript.clone(),
        })
        .await
        .map_err(map_provider_error)?;

    // A reply with no text block (tool use etc.) is an empty answer, not an error.
    let answer = reply.text().unwrap_or_default().to_string();

    let follow_up_questions =
        match synthesize_follow_ups(completions, transcript, &answer).await {
            Ok(questions) => questions,
            Err(e) => {
                warn!("Follow-up synthesis failed, returning answer without suggestions: {e}");
                Vec::new()
            }
        };

    Ok(ChatResponse {
        message: answer,
        conversation_id: reply.id,
        follow_up_questions,
    })
}

/// History in original order, new user message last. No capping or token
/// budgeting is performed.
fn build_transcript(request: &ChatRequest) -> Vec<ChatMessage> {
    let mut transcript = request.conversation_history.clone();
    transcript.push(ChatMessage::user(request.message.clone()));
    transcript
}

/// Issues the secondary call and parses its reply into at most 3 questions.
async fn synthesize_follow_ups(
    completions: &dyn CompletionService,
    mut transcript: Vec<ChatMessage>,
    answer: &str,
) -> Result<Vec<String>, LlmError> {
    transcript.push(ChatMessage::assistant(answer));
    transcript.push(ChatMessage::user(FOLLOW_UP_REQUEST));

    let reply = completions
        .complete(CompletionCall {
            model: FOLLOW_UP_MODEL,
            max_tokens: FOLLOW_UP_MAX_TOKENS,
            system: FOLLOW_UP_SYSTEM.to_string(),
            messages: transcript,
        })
        .await?;

    Ok(parse_follow_up_questions(reply.text().unwrap_or_default()))
}

/// Maps a provider failure to the caller-facing taxonomy: a credential
/// rejection is a configuration problem; everything else is a processing
/// failure.
fn map_provider_error(e: LlmError) -> AppError {
    if e.is_auth_failure() {
        AppError::Configuration(
            "API key not configured. Please set ANTHROPIC_API_KEY environment variable."
                .to_string(),
        )
    } else {
        AppError::Llm(e.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{CompletionReply, ContentBlock, Role, Usage};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Records every call and replays scripted results in order.
    struct ScriptedService {
        calls: Mutex<Vec<CompletionCall>>,
        replies: Mutex<VecDeque<Result<CompletionReply, LlmError>>>,
    }

    impl ScriptedService {
        fn new(replies: Vec<Result<CompletionReply, LlmError>>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                replies: Mutex::new(replies.into()),
            }
        }

        fn recorded_calls(&self) -> Vec<CompletionCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionService for ScriptedService {
        async fn complete(&self, call: CompletionCall) -> Result<CompletionReply, LlmError> {
            self.calls.lock().unwrap().push(call);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted service ran out of replies")
        }
    }

    fn text_reply(id: &str, text: &str) -> CompletionReply {
        CompletionReply {
            id: id.to_string(),
            content: vec![ContentBlock::Text {
                text: text.to_string(),
            }],
            usage: Usage {
                input_tokens: 0,
                output_tokens: 0,
            },
        }
    }

    fn non_text_reply(id: &str) -> CompletionReply {
        CompletionReply {
            id: id.to_string(),
            content: vec![ContentBlock::Other],
            usage: Usage {
                input_tokens: 0,
                output_tokens: 0,
            },
        }
    }

    fn make_request(message: &str, history: Vec<ChatMessage>) -> ChatRequest {
        ChatRequest {
            message: message.to_string(),
            conversation_history: history,
        }
    }

    fn api_error(status: u16) -> LlmError {
        LlmError::Api {
            status,
            message: "upstream error".to_string(),
        }
    }

    // ── happy path ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_valid_request_returns_answer_and_follow_ups() {
        let service = ScriptedService::new(vec![
            Ok(text_reply("msg_primary", "He works in Rust and Python.")),
            Ok(text_reply("msg_followup", "q1?\nq2?\nq3?")),
        ]);

        let response = answer_visitor(
            &service,
            &make_request("What are Aniketh's skills?", vec![]),
        )
        .await
        .unwrap();

        assert_eq!(response.message, "He works in Rust and Python.");
        assert_eq!(response.conversation_id, "msg_primary");
        assert_eq!(response.follow_up_questions.len(), 3);
        assert_eq!(service.recorded_calls().len(), 2);
    }

    #[tokio::test]
    async fn test_transcript_preserves_history_order_and_appends_message() {
        let history = vec![
            ChatMessage::user("Hi"),
            ChatMessage::assistant("Hello! Ask me about Aniketh."),
            ChatMessage::user("What does he study?"),
            ChatMessage::assistant("Computer Science at ASU."),
        ];
        let service = ScriptedService::new(vec![
            Ok(text_reply("msg_1", "answer")),
            Ok(text_reply("msg_2", "")),
        ]);

        answer_visitor(&service, &make_request("And his minors?", history.clone()))
            .await
            .unwrap();

        let calls = service.recorded_calls();
        let primary = &calls[0].messages;
        assert_eq!(primary.len(), history.len() + 1);
        assert_eq!(&primary[..history.len()], &history[..]);
        assert_eq!(primary.last().unwrap(), &ChatMessage::user("And his minors?"));
    }

    #[tokio::test]
    async fn test_follow_up_call_extends_transcript_with_answer_and_request() {
        let service = ScriptedService::new(vec![
            Ok(text_reply("msg_1", "the answer")),
            Ok(text_reply("msg_2", "q?")),
        ]);

        answer_visitor(&service, &make_request("hello", vec![]))
            .await
            .unwrap();

        let calls = service.recorded_calls();
        assert_eq!(calls[1].model, FOLLOW_UP_MODEL);
        let follow_up = &calls[1].messages;
        // transcript (1 turn) + assistant answer + fixed request
        assert_eq!(follow_up.len(), 3);
        assert_eq!(follow_up[1], ChatMessage::assistant("the answer"));
        assert_eq!(follow_up[2].role, Role::User);
        assert_eq!(follow_up[2].content, FOLLOW_UP_REQUEST);
    }

    #[tokio::test]
    async fn test_primary_call_uses_answer_model_and_knowledge_system() {
        let service = ScriptedService::new(vec![
            Ok(text_reply("msg_1", "a")),
            Ok(text_reply("msg_2", "")),
        ]);

        answer_visitor(&service, &make_request("hello", vec![])).await.unwrap();

        let calls = service.recorded_calls();
        assert_eq!(calls[0].model, ANSWER_MODEL);
        assert_eq!(calls[0].max_tokens, 1024);
        assert!(calls[0].system.contains("## Notable Projects"));
    }

    // ── degraded paths ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_non_text_primary_reply_yields_empty_answer() {
        let service = ScriptedService::new(vec![
            Ok(non_text_reply("msg_1")),
            Ok(text_reply("msg_2", "q?")),
        ]);

        let response = answer_visitor(&service, &make_request("hello", vec![]))
            .await
            .unwrap();
        assert_eq!(response.message, "");
        assert_eq!(response.conversation_id, "msg_1");
    }

    #[tokio::test]
    async fn test_follow_up_failure_degrades_to_empty_list() {
        let service = ScriptedService::new(vec![
            Ok(text_reply("msg_1", "the answer")),
            Err(api_error(500)),
        ]);

        let response = answer_visitor(&service, &make_request("hello", vec![]))
            .await
            .unwrap();
        assert_eq!(response.message, "the answer");
        assert!(response.follow_up_questions.is_empty());
    }

    // ── failure mapping ─────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_primary_auth_failure_maps_to_configuration_error() {
        let service = ScriptedService::new(vec![Err(api_error(401))]);

        let err = answer_visitor(&service, &make_request("hello", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
        // Primary failed — the follow-up call must never be issued.
        assert_eq!(service.recorded_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_primary_server_failure_maps_to_processing_error() {
        let service = ScriptedService::new(vec![Err(api_error(529))]);

        let err = answer_visitor(&service, &make_request("hello", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_follow_ups_capped_and_unnumbered() {
        let service = ScriptedService::new(vec![
            Ok(text_reply("msg_1", "a")),
            Ok(text_reply("msg_2", "1. drop me\nkeep one?\nkeep two?\nkeep three?\nkeep four?")),
        ]);

        let response = answer_visitor(&service, &make_request("hello", vec![]))
            .await
            .unwrap();
        assert_eq!(response.follow_up_questions.len(), 3);
        assert!(response
            .follow_up_questions
            .iter()
            .all(|q| !q.starts_with("1.")));
    }
}
