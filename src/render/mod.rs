//! Rendering module for turning schedules into PDF and JSON output.

mod canvas;
mod json;
mod options;
mod pdf;
mod result;

pub use json::{to_json, JsonFormat};
pub use options::{derive_title, Color, PageSize, RenderOptions, Theme};
pub use pdf::{render_schedule, PdfRenderer};
pub use result::{RenderResult, RenderStats};
