//! Reports module - renders stored historical summaries as documents.

mod report_renderer;

pub use report_renderer::{render_report, ReportFormat};
