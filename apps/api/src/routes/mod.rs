pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume tailoring pipeline
        .route(
            "/api/v1/resumes/signals",
            post(generation::handle_extract_signals),
        )
        .route("/api/v1/resumes/generate", post(generation::handle_generate))
        .route(
            "/api/v1/resumes/history/:candidate_id/:job_id",
            get(generation::handle_history),
        )
        .route(
            "/api/v1/resumes/latest/:candidate_id/:job_id",
            get(generation::handle_latest),
        )
        // Document rendering
        .route("/api/v1/render", post(render::handle_render))
        .route("/api/v1/render/text", post(render::handle_render_text))
        .with_state(state)
}
