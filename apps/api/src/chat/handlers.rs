//! Axum route handler for the chat endpoint.
//!
//! The body is taken as raw JSON and validated by hand so that a missing or
//! non-string `message` maps to the 400 validation error the frontend
//! expects, before any provider call is made. The extractor rejection is
//! mapped too — even an unparseable body gets the `{"error": ...}` shape.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use crate::chat::orchestrator::{answer_visitor, ChatRequest, ChatResponse};
use crate::errors::AppError;
use crate::llm_client::ChatMessage;
use crate::state::AppState;

/// POST /api/chatbot
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(body) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    let request = parse_chat_request(&body)?;
    let response = answer_visitor(state.completions.as_ref(), &request).await?;
    Ok(Json(response))
}

/// Validates the raw body into a `ChatRequest`. `message` must be a non-empty
/// string; `conversationHistory` defaults to empty and each entry must be a
/// `{role, content}` pair.
pub fn parse_chat_request(body: &Value) -> Result<ChatRequest, AppError> {
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| {
            AppError::Validation("Message is required and must be a string".to_string())
        })?;

    let conversation_history = match body.get("conversationHistory") {
        None | Some(Value::Null) => Vec::new(),
        Some(history) => serde_json::from_value::<Vec<ChatMessage>>(history.clone()).map_err(
            |_| {
                AppError::Validation(
                    "conversationHistory must be a list of {role, content} entries".to_string(),
                )
            },
        )?,
    };

    Ok(ChatRequest {
        message: message.to_string(),
        conversation_history,
    })
}
