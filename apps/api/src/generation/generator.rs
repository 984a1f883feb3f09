//! Resume synthesis — orchestrates the full tailoring pipeline.
//!
//! Flow: normalize → extract signals → validate → score → upstream call
//! (at most one) → fallback composition on any upstream failure → append
//! history record + mirror onto the job application.
//!
//! The DB-free core lives in [`synthesize`]; [`generate_resume`] wraps it
//! with normalization and persistence.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::composer::compose_fallback;
use crate::generation::history::{append_generation, mirror_onto_application, NewGenerationRecord};
use crate::generation::normalizer::normalize;
use crate::generation::scoring::{compute_match_score, matched_skills};
use crate::generation::signals::{JobSignals, SignalExtractor};
use crate::models::candidate::CandidateProfile;
use crate::upstream::prompts::build_generation_payload;
use crate::upstream::{resolve_resume_text, GenerativeUpstream};

/// Raised when the normalized profile cannot support a tailored resume.
const MISSING_EXPERIENCE_MESSAGE: &str =
    "at least one experience entry needs a title, company, and date range";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Which path produced the resume text. Callers branch on this tag, never
/// on caught exceptions or side-channel flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeSource {
    Upstream,
    Fallback,
}

impl ResumeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeSource::Upstream => "upstream",
            ResumeSource::Fallback => "fallback",
        }
    }
}

/// Tagged result of a synthesis run.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedResume {
    pub source: ResumeSource,
    pub resume_text: String,
    pub match_score: u32,
}

/// Request body for resume generation. The candidate record arrives raw —
/// normalization happens inside the pipeline, never in the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub candidate: Value,
    pub job_description: String,
}

/// Response from the generation pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub record_id: Uuid,
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub source: ResumeSource,
    pub resume_text: String,
    pub match_score: u32,
    /// Candidate skills that matched the job's requirements — lets the UI
    /// explain the score.
    pub matched_skills: Vec<String>,
    pub signals: JobSignals,
}

// ────────────────────────────────────────────────────────────────────────────
// Synthesis core (DB-free)
// ────────────────────────────────────────────────────────────────────────────

/// Synthesizes tailored resume text for an already-normalized profile.
///
/// Fails with a validation error *before any upstream call* when the
/// profile has zero valid experience entries. Every upstream failure mode
/// (transport, non-2xx, unresolvable/empty text) downgrades to the
/// deterministic fallback composer — generation still succeeds.
pub async fn synthesize(
    profile: &CandidateProfile,
    signals: &JobSignals,
    job_id: Uuid,
    job_description: &str,
    upstream: &dyn GenerativeUpstream,
) -> Result<GeneratedResume, AppError> {
    if profile.experience.is_empty() {
        return Err(AppError::Validation(MISSING_EXPERIENCE_MESSAGE.to_string()));
    }

    let match_score = compute_match_score(&profile.skills, &signals.required_skills);

    let payload = build_generation_payload(profile, job_id, job_description);

    let resume_text = match upstream.generate(&payload).await {
        Ok(response) => match resolve_resume_text(&response) {
            Some(text) => {
                return Ok(GeneratedResume {
                    source: ResumeSource::Upstream,
                    resume_text: text,
                    match_score,
                });
            }
            None => {
                warn!("Upstream response held no usable resume text, composing fallback");
                compose_fallback(profile, signals)
            }
        },
        Err(e) => {
            warn!("Upstream call failed ({e}), composing fallback");
            compose_fallback(profile, signals)
        }
    };

    Ok(GeneratedResume {
        source: ResumeSource::Fallback,
        resume_text,
        match_score,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Full pipeline (normalize → synthesize → persist)
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full generation pipeline and persists the outcome.
///
/// Re-invoking for the same `(candidate_id, job_id)` appends a new history
/// record and overwrites the job application's current-resume mirror; prior
/// history records are never mutated.
pub async fn generate_resume(
    pool: &PgPool,
    upstream: &dyn GenerativeUpstream,
    extractor: &SignalExtractor,
    request: GenerateRequest,
) -> Result<GenerateResponse, AppError> {
    let profile = normalize(&request.candidate);
    let signals = extractor.extract(&request.job_description);
    info!(
        candidate_id = %request.candidate_id,
        job_id = %request.job_id,
        required_skills = signals.required_skills.len(),
        industry = %signals.industry,
        "Job signals extracted"
    );

    let generated = synthesize(
        &profile,
        &signals,
        request.job_id,
        &request.job_description,
        upstream,
    )
    .await?;

    info!(
        source = generated.source.as_str(),
        match_score = generated.match_score,
        "Resume synthesized"
    );

    let record = NewGenerationRecord {
        candidate_id: request.candidate_id,
        job_id: request.job_id,
        job_description: &request.job_description,
        resume_text: &generated.resume_text,
        match_score: generated.match_score as i32,
        source: generated.source.as_str(),
    };

    let record_id = append_generation(pool, &record).await?;
    mirror_onto_application(pool, &record).await?;

    let matched: Vec<String> = matched_skills(&profile.skills, &signals.required_skills)
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(GenerateResponse {
        record_id,
        candidate_id: request.candidate_id,
        job_id: request.job_id,
        source: generated.source,
        resume_text: generated.resume_text,
        match_score: generated.match_score,
        matched_skills: matched,
        signals,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
