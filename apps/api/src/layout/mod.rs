// Document layout: static font metrics, the flowed-text pagination pass, and
// PDF emission. CPU-bound rendering runs inside tokio::task::spawn_blocking.

pub mod flow;
pub mod font_metrics;
pub mod pdf;
pub mod render;

// Re-export the public API consumed by other modules (handlers, state).
pub use font_metrics::{default_page_setup, PageSetup};
pub use pdf::emit_pdf;
pub use render::layout_resume;
