// Domain layer - Capture records, display modes, chart payloads and smoothing
pub mod capture;
pub mod chart;
pub mod display_mode;
pub mod moving_average;
