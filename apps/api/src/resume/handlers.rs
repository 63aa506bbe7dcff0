//! Axum route handler for the resume endpoint.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;

use crate::errors::AppError;
use crate::layout::{emit_pdf, layout_resume};
use crate::resume::data::{resume_data, RESUME_FILENAME};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResumeFormatQuery {
    pub format: Option<String>,
}

/// GET /api/resume?format=pdf|json
///
/// `json` returns the static record verbatim; `pdf` (the default) runs the
/// layout pass and returns the rendered document as a download.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Query(query): Query<ResumeFormatQuery>,
) -> Result<Response, AppError> {
    let format = query.format.as_deref().unwrap_or("pdf");

    match format {
        "json" => Ok(Json(resume_data()).into_response()),
        "pdf" => {
            let setup = state.page_setup.clone();
            // Layout and emission are CPU-bound; keep them off the async
            // executor.
            let bytes = tokio::task::spawn_blocking(move || {
                let pages = layout_resume(resume_data(), &setup);
                emit_pdf(&pages, &setup, "Resume")
            })
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed: {e}")))??;

            let headers = [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{RESUME_FILENAME}\""),
                ),
            ];
            Ok((headers, Bytes::from(bytes)).into_response())
        }
        _ => Err(AppError::Validation(
            "Invalid format. Use ?format=pdf or ?format=json".to_string(),
        )),
    }
}
