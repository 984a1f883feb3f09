//! Axum route handlers for document rendering.
//!
//! The engine compile is CPU-bound, so both handlers run it inside
//! `tokio::task::spawn_blocking`. Rendered bytes pass straight back to the
//! caller as a download — this subsystem never stores them.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::CanonicalResumeFields;
use crate::render::document::{render_document, render_text_document};
use crate::state::AppState;

fn default_template_id() -> String {
    "classic".to_string()
}

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub fields: CanonicalResumeFields,
    #[serde(default = "default_template_id")]
    pub template_id: String,
    pub job_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct RenderTextRequest {
    pub resume_text: String,
    pub candidate_name: String,
    pub job_id: Uuid,
}

/// POST /api/v1/render
///
/// Structured path: canonical resume fields bound into a named template.
pub async fn handle_render(
    State(_state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Response, AppError> {
    let filename = download_filename(&request.fields.full_name, request.job_id);

    let pdf =
        tokio::task::spawn_blocking(move || render_document(&request.fields, &request.template_id))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))??;

    info!(bytes = pdf.len(), %filename, "Rendered structured resume document");
    Ok(pdf_response(pdf, &filename))
}

/// POST /api/v1/render/text
///
/// Lightweight path: already-generated resume text streamed into the
/// fixed-font page layout.
pub async fn handle_render_text(
    State(_state): State<AppState>,
    Json(request): Json<RenderTextRequest>,
) -> Result<Response, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let filename = download_filename(&request.candidate_name, request.job_id);

    let pdf = tokio::task::spawn_blocking(move || render_text_document(&request.resume_text))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))??;

    info!(bytes = pdf.len(), %filename, "Rendered text resume document");
    Ok(pdf_response(pdf, &filename))
}

fn pdf_response(pdf: Vec<u8>, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Bytes::from(pdf),
    )
        .into_response()
}

/// Download filename convention: candidate name + job identifier.
fn download_filename(candidate_name: &str, job_id: Uuid) -> String {
    let slug: String = candidate_name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let slug = slug.trim_matches('_');
    let slug = if slug.is_empty() { "candidate" } else { slug };
    format!("{slug}_{job_id}_resume.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_embeds_name_and_job_id() {
        let job_id = Uuid::new_v4();
        let filename = download_filename("Jane Doe", job_id);
        assert_eq!(filename, format!("Jane_Doe_{job_id}_resume.pdf"));
    }

    #[test]
    fn test_filename_falls_back_for_empty_name() {
        let job_id = Uuid::new_v4();
        let filename = download_filename("  ", job_id);
        assert!(filename.starts_with("candidate_"));
    }

    #[test]
    fn test_filename_strips_non_alphanumerics() {
        let job_id = Uuid::new_v4();
        let filename = download_filename("Jörg O'Neil!", job_id);
        assert!(!filename.contains('\''));
        assert!(!filename.contains('!'));
    }
}
