//! # napdf
//!
//! Sleep-schedule Markdown to paginated PDF rendering for Rust.
//!
//! This library parses the constrained Markdown dialect used by
//! AI-generated baby sleep schedules (headings, bold time labels,
//! bullet lists) and lays it out onto fixed-size PDF pages with
//! hard-wrapped bullets, dividers, and page-number footers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use napdf::{render_file, RenderOptions};
//!
//! fn main() -> napdf::Result<()> {
//!     // Render a Markdown schedule to PDF
//!     let options = RenderOptions::new().with_age_months(6);
//!     let pdf = render_file("schedule.md", &options)?;
//!     std::fs::write("schedule.pdf", pdf)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Permissive parsing**: unrecognized lines degrade into plain
//!   bullets instead of errors
//! - **Title echo suppression**: body lines repeating the document
//!   title are dropped
//! - **Deterministic layout**: identical input produces identical
//!   page breaks and, with a pinned creation date, identical bytes
//! - **US Letter and A4** page geometry
//! - **JSON model dump** of the parsed schedule

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Schedule, Section};
pub use parser::{
    ClassifiedLine, LineClassifier, LineKind, MarkdownParser, SectionCollector, SectionSink,
};
pub use render::{
    derive_title, render_schedule, to_json, Color, JsonFormat, PageSize, PdfRenderer,
    RenderOptions, RenderResult, RenderStats, Theme,
};

use std::path::Path;

/// Parse Markdown into a schedule model.
///
/// Parsing never fails; malformed lines degrade gracefully.
///
/// # Arguments
///
/// * `markdown` - The schedule Markdown text
/// * `title` - Display title, used to suppress echoes of itself
///
/// # Example
///
/// ```
/// use napdf::parse_str;
///
/// let schedule = parse_str("## Nap\n- Dim the room", "Sleep Schedule");
/// assert_eq!(schedule.section_count(), 1);
/// ```
pub fn parse_str(markdown: &str, title: &str) -> Schedule {
    let mut parser = MarkdownParser::new(title, SectionCollector::new());
    parser.feed(markdown);
    Schedule {
        title: title.to_string(),
        sections: parser.finish().into_sections(),
    }
}

/// Parse a Markdown file into a schedule model.
///
/// # Example
///
/// ```no_run
/// use napdf::parse_file;
///
/// let schedule = parse_file("schedule.md", "Sleep Schedule").unwrap();
/// println!("Sections: {}", schedule.section_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P, title: &str) -> Result<Schedule> {
    let markdown = std::fs::read_to_string(path)?;
    Ok(parse_str(&markdown, title))
}

/// Render Markdown straight to PDF bytes.
///
/// Sections stream from the parser into the paginating renderer, so
/// at most one section is in flight at a time.
///
/// # Example
///
/// ```
/// use napdf::{render_str, RenderOptions};
///
/// let pdf = render_str("## Nap\n- Dim the room", &RenderOptions::new()).unwrap();
/// assert!(pdf.starts_with(b"%PDF-"));
/// ```
pub fn render_str(markdown: &str, options: &RenderOptions) -> Result<Vec<u8>> {
    Ok(render_str_with_stats(markdown, options)?.bytes)
}

/// Render Markdown to PDF bytes plus layout statistics.
///
/// # Example
///
/// ```
/// use napdf::{render_str_with_stats, RenderOptions};
///
/// let result = render_str_with_stats("## Nap\n- Dim the room", &RenderOptions::new()).unwrap();
/// println!("{} pages", result.stats.page_count);
/// ```
pub fn render_str_with_stats(markdown: &str, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = PdfRenderer::new(options.clone());
    let mut parser = MarkdownParser::new(&options.title, renderer);
    parser.feed(markdown);
    parser.finish().finish()
}

/// Render a Markdown file to PDF bytes.
///
/// # Example
///
/// ```no_run
/// use napdf::{render_file, RenderOptions};
///
/// let pdf = render_file("schedule.md", &RenderOptions::new()).unwrap();
/// std::fs::write("schedule.pdf", pdf).unwrap();
/// ```
pub fn render_file<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<Vec<u8>> {
    let markdown = std::fs::read_to_string(path)?;
    render_str(&markdown, options)
}

/// Builder for parsing and rendering schedules.
///
/// # Example
///
/// ```
/// use napdf::Napdf;
///
/// let pdf = Napdf::new()
///     .with_age_months(3)
///     .parse("### Wake-Up\n- Feed baby")
///     .to_pdf()?;
/// # Ok::<(), napdf::Error>(())
/// ```
pub struct Napdf {
    render_options: RenderOptions,
}

impl Napdf {
    /// Create a new Napdf builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Set the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Derive the title from the baby's age in months.
    pub fn with_age_months(mut self, months: u32) -> Self {
        self.render_options = self.render_options.with_age_months(months);
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.render_options = self.render_options.with_page_size(page_size);
        self
    }

    /// Set the bullet wrap width in characters.
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.render_options = self.render_options.with_wrap_width(width);
        self
    }

    /// Set the color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.render_options = self.render_options.with_theme(theme);
        self
    }

    /// Disable content stream compression. Useful for debugging the
    /// generated operators.
    pub fn uncompressed(mut self) -> Self {
        self.render_options = self.render_options.with_compression(false);
        self
    }

    /// Pin the creation date stamped into the document metadata.
    pub fn with_created(mut self, created: chrono::DateTime<chrono::Utc>) -> Self {
        self.render_options = self.render_options.with_created(created);
        self
    }

    /// Parse Markdown and return a result wrapper.
    pub fn parse(self, markdown: &str) -> NapdfResult {
        let schedule = parse_str(markdown, &self.render_options.title);
        NapdfResult {
            schedule,
            render_options: self.render_options,
        }
    }

    /// Parse a Markdown file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<NapdfResult> {
        let markdown = std::fs::read_to_string(path)?;
        Ok(self.parse(&markdown))
    }
}

impl Default for Napdf {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a schedule.
pub struct NapdfResult {
    /// The parsed schedule
    pub schedule: Schedule,
    /// Render options to use
    render_options: RenderOptions,
}

impl NapdfResult {
    /// Render to PDF bytes.
    pub fn to_pdf(&self) -> Result<Vec<u8>> {
        Ok(render_schedule(&self.schedule, &self.render_options)?.bytes)
    }

    /// Render to PDF bytes plus layout statistics.
    pub fn to_pdf_with_stats(&self) -> Result<RenderResult> {
        render_schedule(&self.schedule, &self.render_options)
    }

    /// Convert the parsed model to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.schedule, format)
    }

    /// Get plain text content of the schedule.
    pub fn plain_text(&self) -> String {
        self.schedule.plain_text()
    }

    /// Get the parsed schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}
