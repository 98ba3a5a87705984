//! Report rendering through minijinja templates.
//!
//! Templates see three filters: `style(name)` applies a [`Theme`](crate::theme::Theme)
//! entry according to the [`OutputMode`], `pad(width)` fits text to a column,
//! and `nl` appends a newline.

mod filters;
mod output;
mod renderer;

pub use output::OutputMode;
pub use renderer::{render_report, RenderError, ReportRenderer};
