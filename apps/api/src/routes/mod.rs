pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat;
use crate::resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/chatbot", post(chat::handlers::handle_chat))
        .route("/api/resume", get(resume::handlers::handle_get_resume))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Endpoint tests
// ────────────────────────────────────────────────────────────────────────────
