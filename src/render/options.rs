//! Rendering options and configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Options for rendering a schedule to PDF.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Display title, drawn at the top of the first page and used to
    /// suppress echoes of itself in the body
    pub title: String,

    /// Page dimensions
    pub page_size: PageSize,

    /// Hard wrap width for bullet text, in characters
    pub wrap_width: usize,

    /// Colors for headings, labels, and body text
    pub theme: Theme,

    /// Compress content streams with FlateDecode
    pub compress: bool,

    /// Creation date stamped into the document metadata
    /// (None = current time at render)
    pub created: Option<DateTime<Utc>>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Derive the title from the baby's age in months.
    ///
    /// An age of zero keeps the default title.
    pub fn with_age_months(mut self, months: u32) -> Self {
        self.title = derive_title(months);
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the bullet wrap width in characters.
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width.max(1);
        self
    }

    /// Set the color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Pin the creation date stamped into the document metadata.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: derive_title(0),
            page_size: PageSize::Letter,
            wrap_width: 90,
            theme: Theme::default(),
            compress: true,
            created: None,
        }
    }
}

/// Build the display title for a baby age in months.
///
/// Zero or missing age falls back to the generic title.
pub fn derive_title(age_months: u32) -> String {
    if age_months > 0 {
        format!("{}-Month-Old Sleep Schedule", age_months)
    } else {
        "Sleep Schedule".to_string()
    }
}

/// Page dimensions for the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageSize {
    /// US Letter, 612 x 792 pt
    #[default]
    Letter,
    /// ISO A4, 595 x 842 pt
    A4,
}

impl PageSize {
    /// Get the page width and height in points.
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.0, 842.0),
        }
    }

    /// Parse a page size name (e.g., "letter", "a4").
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "letter" | "us-letter" => Ok(PageSize::Letter),
            "a4" => Ok(PageSize::A4),
            other => Err(Error::InvalidPageSize(other.to_string())),
        }
    }
}

/// An RGB color with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a color from RGB components.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Color theme for the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Title, headings, dividers, and page numbers
    pub accent: Color,

    /// Time range labels
    pub label: Color,

    /// Bullet text
    pub body: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::new(1.0, 0.8, 0.9),
            label: Color::new(0.6, 0.4, 0.5),
            body: Color::new(0.2, 0.2, 0.2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_age_months(6)
            .with_page_size(PageSize::A4)
            .with_wrap_width(40)
            .with_compression(false);

        assert_eq!(options.title, "6-Month-Old Sleep Schedule");
        assert_eq!(options.page_size, PageSize::A4);
        assert_eq!(options.wrap_width, 40);
        assert!(!options.compress);
    }

    #[test]
    fn test_derive_title() {
        assert_eq!(derive_title(3), "3-Month-Old Sleep Schedule");
        assert_eq!(derive_title(0), "Sleep Schedule");
    }

    #[test]
    fn test_wrap_width_never_zero() {
        let options = RenderOptions::new().with_wrap_width(0);
        assert_eq!(options.wrap_width, 1);
    }

    #[test]
    fn test_page_size_parse() {
        assert_eq!(PageSize::parse("letter").unwrap(), PageSize::Letter);
        assert_eq!(PageSize::parse(" A4 ").unwrap(), PageSize::A4);
        assert!(PageSize::parse("tabloid").is_err());
    }

    #[test]
    fn test_default_theme_palette() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::new(1.0, 0.8, 0.9));
        assert_eq!(theme.label, Color::new(0.6, 0.4, 0.5));
        assert_eq!(theme.body, Color::new(0.2, 0.2, 0.2));
    }
}
