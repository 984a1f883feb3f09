use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An immutable generation-history record. Appended once per generation
/// request, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeGenerationRow {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    /// Job description, capped at the excerpt limit.
    pub job_description_excerpt: String,
    pub resume_text: String,
    pub match_score: i32,
    /// "upstream" | "fallback"
    pub source: String,
    pub created_at: DateTime<Utc>,
}

