pub mod candidate;
pub mod generation;
pub mod resume;
