// Frame-time graph pipeline - Capture loading, smoothing, series composition and render mapping
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
