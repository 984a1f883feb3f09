//! Generation history store — append-only records of every generation
//! attempt, plus the job application's current-resume mirror.
//!
//! Simple append/read semantics: records are immutable once inserted, and
//! the mirror is a last-write-wins UPDATE with no inter-request
//! coordination (the UI re-reads before editing).

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::generation::ResumeGenerationRow;

/// Job descriptions are stored as an excerpt, capped at this many chars.
const JD_EXCERPT_MAX_CHARS: usize = 500;

/// A record ready to append. Borrowed fields — built and used within one
/// generation request.
#[derive(Debug)]
pub struct NewGenerationRecord<'a> {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub job_description: &'a str,
    pub resume_text: &'a str,
    pub match_score: i32,
    pub source: &'a str,
}

/// Appends an immutable generation record and returns its id.
pub async fn append_generation(
    pool: &PgPool,
    record: &NewGenerationRecord<'_>,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO resume_generations
            (id, candidate_id, job_id, job_description_excerpt, resume_text, match_score, source, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
        "#,
    )
    .bind(id)
    .bind(record.candidate_id)
    .bind(record.job_id)
    .bind(excerpt(record.job_description))
    .bind(record.resume_text)
    .bind(record.match_score)
    .bind(record.source)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Overwrites the job application's current-resume fields with the latest
/// generation outcome.
pub async fn mirror_onto_application(
    pool: &PgPool,
    record: &NewGenerationRecord<'_>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE job_applications
        SET resume_text = $3,
            match_score = $4,
            resume_source = $5,
            resume_generated_at = NOW()
        WHERE candidate_id = $1 AND job_id = $2
        "#,
    )
    .bind(record.candidate_id)
    .bind(record.job_id)
    .bind(record.resume_text)
    .bind(record.match_score)
    .bind(record.source)
    .execute(pool)
    .await?;

    Ok(())
}

/// Full generation history for a job application, newest first.
pub async fn history_for_application(
    pool: &PgPool,
    candidate_id: Uuid,
    job_id: Uuid,
) -> Result<Vec<ResumeGenerationRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeGenerationRow>(
        r#"
        SELECT * FROM resume_generations
        WHERE candidate_id = $1 AND job_id = $2
        ORDER BY created_at DESC
        "#,
    )
    .bind(candidate_id)
    .bind(job_id)
    .fetch_all(pool)
    .await
}

/// The most recent generation record for a job application, if any.
pub async fn latest_for_application(
    pool: &PgPool,
    candidate_id: Uuid,
    job_id: Uuid,
) -> Result<Option<ResumeGenerationRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeGenerationRow>(
        r#"
        SELECT * FROM resume_generations
        WHERE candidate_id = $1 AND job_id = $2
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(candidate_id)
    .bind(job_id)
    .fetch_optional(pool)
    .await
}

/// Caps the stored job description on a char boundary.
fn excerpt(job_description: &str) -> &str {
    match job_description.char_indices().nth(JD_EXCERPT_MAX_CHARS) {
        Some((idx, _)) => &job_description[..idx],
        None => job_description,
    }
}
