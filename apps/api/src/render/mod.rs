// Document rendering: canonical resume fields → fixed-format PDF bytes.
// Sanitization and field composition are pure and synchronous; the engine
// compile is CPU-bound and must run inside tokio::task::spawn_blocking.

pub mod compose;
pub mod document;
pub mod handlers;
pub mod sanitize;
pub mod template;

pub use template::RenderError;
