// Presentation layer - Renderer-facing configuration
pub mod render_adapter;
pub mod theme;
