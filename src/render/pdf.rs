//! Paginating PDF renderer.
//!
//! Owns the layout cursor and page state for one document. The cursor
//! starts near the top of the page and only ever moves down; when a
//! draw would not fit, a new page is allocated first and the cursor
//! resets to the top margin. Space checks happen before each draw,
//! never after.

use chrono::Utc;

use crate::error::Result;
use crate::model::{Schedule, Section};
use crate::parser::SectionSink;
use crate::render::canvas::PageCanvas;
use crate::render::{RenderOptions, RenderResult, RenderStats};

// Layout constants in points.
const MARGIN_X: f32 = 50.0;
const TOP_OFFSET: f32 = 60.0;
const TITLE_SIZE: f32 = 20.0;
const TITLE_ADVANCE: f32 = 40.0;
const HEADING_SIZE: f32 = 16.0;
const HEADING_ADVANCE: f32 = 22.0;
const LABEL_SIZE: f32 = 12.0;
const LABEL_ADVANCE: f32 = 18.0;
const BODY_SIZE: f32 = 12.0;
const LINE_HEIGHT: f32 = BODY_SIZE + 4.0;
const BULLET_X: f32 = 60.0;
const BULLET_GAP: f32 = 6.0;
const DIVIDER_ADVANCE: f32 = 16.0;
// Headroom for a heading plus at least one line.
const SECTION_MIN_SPACE: f32 = 80.0;
const LINE_MIN_SPACE: f32 = 30.0;
const PAGE_NUMBER_SIZE: f32 = 10.0;
const PAGE_NUMBER_Y: f32 = 20.0;
const PAGE_NUMBER_INSET: f32 = 40.0;

/// Renders flushed sections onto a page canvas, paginating as needed.
///
/// The title is drawn when the renderer is created, so an input with
/// no sections still yields a one-page document. Implements
/// [`SectionSink`] so the parser can stream sections straight into it
/// with at most one section in flight.
pub struct PdfRenderer {
    options: RenderOptions,
    canvas: PageCanvas,
    y: f32,
    stats: RenderStats,
}

impl PdfRenderer {
    /// Create a renderer and draw the title on the first page.
    pub fn new(options: RenderOptions) -> Self {
        let (width, height) = options.page_size.dimensions();
        let mut canvas = PageCanvas::new(width, height);
        let mut stats = RenderStats::new();

        let mut y = height - TOP_OFFSET;
        canvas.text(&options.title, MARGIN_X, y, TITLE_SIZE, options.theme.accent);
        stats.add_line();
        y -= TITLE_ADVANCE;

        Self {
            options,
            canvas,
            y,
            stats,
        }
    }

    /// Draw page numbers, assemble the document, and return the bytes
    /// with layout statistics.
    pub fn finish(mut self) -> Result<RenderResult> {
        // Page count is frozen here; this pass only appends the number
        // to each existing page.
        let count = self.canvas.page_count();
        let x = self.canvas.width() - PAGE_NUMBER_INSET;
        for index in 0..count {
            let number = (index + 1).to_string();
            self.canvas.text_on_page(
                index,
                &number,
                x,
                PAGE_NUMBER_Y,
                PAGE_NUMBER_SIZE,
                self.options.theme.accent,
            );
        }
        self.stats.page_count = count as u32;

        let created = self.options.created.unwrap_or_else(Utc::now);
        let bytes = self
            .canvas
            .finish(&self.options.title, created, self.options.compress)?;
        Ok(RenderResult::new(bytes, self.stats))
    }

    /// Allocate a new page if fewer than `needed` points remain.
    fn ensure_space(&mut self, needed: f32) {
        if self.y < needed {
            self.canvas.add_page();
            self.y = self.canvas.height() - TOP_OFFSET;
        }
    }

    fn divider(&mut self) {
        let right = self.canvas.width() - MARGIN_X;
        self.canvas.line(
            (MARGIN_X, self.y),
            (right, self.y),
            1.0,
            self.options.theme.accent,
        );
        self.y -= DIVIDER_ADVANCE;
    }
}

impl SectionSink for PdfRenderer {
    fn section(&mut self, section: Section) {
        if !section.has_heading() {
            log::debug!("skipping section without heading");
            return;
        }
        self.stats.add_section();

        self.ensure_space(SECTION_MIN_SPACE);
        self.canvas.text(
            &section.heading,
            MARGIN_X,
            self.y,
            HEADING_SIZE,
            self.options.theme.accent,
        );
        self.stats.add_line();
        self.y -= HEADING_ADVANCE;

        // The section headroom check above already covered the label.
        if section.has_time_label() {
            self.canvas.text(
                &section.time_label,
                MARGIN_X,
                self.y,
                LABEL_SIZE,
                self.options.theme.label,
            );
            self.stats.add_line();
            self.y -= LABEL_ADVANCE;
        }

        for bullet in &section.bullets {
            self.stats.add_bullet();
            for (idx, chunk) in wrap_chunks(bullet, self.options.wrap_width)
                .iter()
                .enumerate()
            {
                self.ensure_space(LINE_MIN_SPACE);
                let prefix = if idx == 0 { "• " } else { "   " };
                let line = format!("{}{}", prefix, chunk.trim());
                self.canvas
                    .text(&line, BULLET_X, self.y, BODY_SIZE, self.options.theme.body);
                self.stats.add_line();
                self.y -= LINE_HEIGHT;
            }
            self.y -= BULLET_GAP;
        }

        self.divider();
    }
}

/// Render an already parsed schedule.
///
/// The schedule's own title is drawn and stamped into the metadata,
/// so rendering a parsed model is byte-identical to streaming the same
/// Markdown straight into the renderer.
pub fn render_schedule(schedule: &Schedule, options: &RenderOptions) -> Result<RenderResult> {
    let options = options.clone().with_title(schedule.title.clone());
    let mut renderer = PdfRenderer::new(options);
    for section in &schedule.sections {
        renderer.section(section.clone());
    }
    renderer.finish()
}

/// Split text into chunks of at most `width` characters, mid-word if
/// necessary. Empty text yields a single empty chunk so an empty
/// bullet still occupies one line.
fn wrap_chunks(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    if text.is_empty() {
        return vec![String::new()];
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
