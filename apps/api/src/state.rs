use std::sync::Arc;

use sqlx::PgPool;

use crate::generation::signals::SignalExtractor;
use crate::upstream::GenerativeUpstream;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// The generative upstream behind a trait object — tests swap in a mock.
    pub upstream: Arc<dyn GenerativeUpstream>,
    /// Vocabulary-based signal extractor, built once at startup.
    pub extractor: Arc<SignalExtractor>,
}
