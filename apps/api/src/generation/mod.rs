// Resume tailoring pipeline.
// Flow: normalize profile → extract job signals → match score → synthesize
// (upstream, else fallback composer) → append history + mirror onto the
// job application. Rendering lives in `render`, the outbound client in
// `upstream`.

pub mod composer;
pub mod generator;
pub mod handlers;
pub mod history;
pub mod normalizer;
pub mod scoring;
pub mod signals;
