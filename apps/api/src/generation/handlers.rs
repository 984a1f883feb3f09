//! Axum route handlers for the resume tailoring pipeline.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::{generate_resume, GenerateRequest, GenerateResponse};
use crate::generation::history::{history_for_application, latest_for_application};
use crate::generation::signals::JobSignals;
use crate::models::generation::ResumeGenerationRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SignalsRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct SignalsResponse {
    pub signals: JobSignals,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub records: Vec<ResumeGenerationRow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/signals
///
/// Extraction preview — shows what the pipeline will read out of a job
/// description before committing to a generation.
pub async fn handle_extract_signals(
    State(state): State<AppState>,
    Json(request): Json<SignalsRequest>,
) -> Result<Json<SignalsResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let signals = state.extractor.extract(&request.job_description);
    Ok(Json(SignalsResponse { signals }))
}

/// POST /api/v1/resumes/generate
///
/// Full pipeline: normalize → signals → score → synthesize (upstream or
/// fallback) → persist history + mirror. A failed upstream call never
/// blocks the caller from getting a resume; only insufficient profile data
/// does.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let response = generate_resume(
        &state.db,
        state.upstream.as_ref(),
        &state.extractor,
        request,
    )
    .await?;

    Ok(Json(response))
}

/// GET /api/v1/resumes/history/:candidate_id/:job_id
///
/// Full generation history for a job application, newest first.
pub async fn handle_history(
    State(state): State<AppState>,
    Path((candidate_id, job_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<HistoryResponse>, AppError> {
    let records = history_for_application(&state.db, candidate_id, job_id).await?;
    Ok(Json(HistoryResponse { records }))
}

/// GET /api/v1/resumes/latest/:candidate_id/:job_id
///
/// The most recent generation record — what the "regenerate" flow reads.
pub async fn handle_latest(
    State(state): State<AppState>,
    Path((candidate_id, job_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ResumeGenerationRow>, AppError> {
    latest_for_application(&state.db, candidate_id, job_id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No generation record for candidate {candidate_id} and job {job_id}"
            ))
        })
}
