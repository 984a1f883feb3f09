/// Upstream generative-service client — the single point of entry for all
/// outbound generation calls.
///
/// ARCHITECTURAL RULE: no other module may call the upstream service
/// directly. The client is carried in `AppState` as a trait object so
/// tests inject a mock; failures here are never surfaced to API callers —
/// the generator downgrades every one of them to the fallback composer.
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod prompts;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Upstream response resolved to empty text")]
    EmptyText,
}

/// The generative upstream. One generation request makes at most one call;
/// there is no retry loop — any failure falls back to offline composition.
#[async_trait]
pub trait GenerativeUpstream: Send + Sync {
    async fn generate(&self, payload: &Value) -> Result<Value, UpstreamError>;
}

/// Production impl backed by reqwest. The configured client timeout is the
/// caller-imposed bound on the outbound call.
pub struct HttpUpstream {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpUpstream {
    pub fn new(endpoint: String, api_key: String, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl GenerativeUpstream for HttpUpstream {
    async fn generate(&self, payload: &Value) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let value: Value = response.json().await?;
        debug!("Upstream generation call succeeded");
        Ok(value)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response shape resolution
// ────────────────────────────────────────────────────────────────────────────

/// Keys the resume text may live under, in priority order. The first key
/// holding a non-empty string wins.
const RESPONSE_TEXT_KEYS: &[&str] = &[
    "resumeText",
    "resume",
    "text",
    "content",
    "generatedText",
    "output",
    "result",
];

/// Resolves the resume text out of an upstream response body.
///
/// An explicit ordered key list rather than duck-typed probing — the
/// priority order is auditable and testable in isolation.
pub fn resolve_resume_text(response: &Value) -> Option<String> {
    RESPONSE_TEXT_KEYS
        .iter()
        .filter_map(|key| response.get(key))
        .filter_map(|value| value.as_str())
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_primary_key() {
        let response = json!({"resumeText": "JANE DOE\nEngineer"});
        assert_eq!(
            resolve_resume_text(&response).as_deref(),
            Some("JANE DOE\nEngineer")
        );
    }

    #[test]
    fn test_resolve_priority_order() {
        // "resumeText" outranks "text" even when both are present.
        let response = json!({"text": "second choice", "resumeText": "first choice"});
        assert_eq!(resolve_resume_text(&response).as_deref(), Some("first choice"));
    }

    #[test]
    fn test_resolve_skips_empty_and_whitespace_values() {
        let response = json!({"resumeText": "   ", "resume": "", "content": "usable"});
        assert_eq!(resolve_resume_text(&response).as_deref(), Some("usable"));
    }

    #[test]
    fn test_resolve_skips_non_string_values() {
        let response = json!({"resumeText": 42, "text": "fallback key"});
        assert_eq!(resolve_resume_text(&response).as_deref(), Some("fallback key"));
    }

    #[test]
    fn test_resolve_none_when_no_key_matches() {
        let response = json!({"unrelated": "value"});
        assert_eq!(resolve_resume_text(&response), None);
    }

    #[test]
    fn test_resolved_text_is_trimmed() {
        let response = json!({"resume": "  text with padding  "});
        assert_eq!(
            resolve_resume_text(&response).as_deref(),
            Some("text with padding")
        );
    }
}
