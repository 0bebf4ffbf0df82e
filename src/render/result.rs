//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a schedule, including the PDF bytes and layout
/// statistics.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The finished PDF document
    pub bytes: Vec<u8>,

    /// Layout statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(bytes: Vec<u8>, stats: RenderStats) -> Self {
        Self { bytes, stats }
    }

    /// Get the document length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check whether the byte buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Statistics collected while laying out a schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderStats {
    /// Total number of pages in the document
    pub page_count: u32,

    /// Number of sections drawn
    pub section_count: u32,

    /// Number of bullets drawn
    pub bullet_count: u32,

    /// Number of text lines drawn, wrapped chunks included
    pub line_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment section count.
    pub fn add_section(&mut self) {
        self.section_count += 1;
    }

    /// Increment bullet count.
    pub fn add_bullet(&mut self) {
        self.bullet_count += 1;
    }

    /// Increment line count.
    pub fn add_line(&mut self) {
        self.line_count += 1;
    }
}
