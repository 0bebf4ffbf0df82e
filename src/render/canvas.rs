//! Low-level page canvas over `pdf-writer`.
//!
//! The paginating renderer only needs "draw text at (x, y)", "draw a
//! line", and "allocate a page"; this type provides exactly that and
//! handles document assembly when the render is done. Pages hold one
//! content stream each and are append-only.

use chrono::{DateTime, Datelike, Timelike, Utc};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use pdf_writer::{Content, Date, Filter, Name, Pdf, Rect, Ref, Str, TextStr};
use std::io::Write;

use crate::error::{Error, Result};
use crate::render::Color;

const FONT_NAME: Name = Name(b"F1");
const PRODUCER: &str = concat!("napdf ", env!("CARGO_PKG_VERSION"));

/// A growing stack of fixed-size pages with a Helvetica text primitive.
pub struct PageCanvas {
    width: f32,
    height: f32,
    pages: Vec<Content>,
}

impl PageCanvas {
    /// Create a canvas with one empty page.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            pages: vec![Content::new()],
        }
    }

    /// Page width in points.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Page height in points.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Number of pages allocated so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Append a new empty page and make it current.
    pub fn add_page(&mut self) {
        self.pages.push(Content::new());
        log::debug!("allocated page {}", self.pages.len());
    }

    /// Draw text on the current page at `(x, y)` (baseline, from the
    /// bottom-left corner).
    pub fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        let index = self.pages.len() - 1;
        self.text_on_page(index, text, x, y, size, color);
    }

    /// Draw text on an already allocated page. Used by the final
    /// page-numbering pass; never allocates.
    pub fn text_on_page(
        &mut self,
        index: usize,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    ) {
        let encoded = to_winansi_bytes(text);
        self.pages[index]
            .begin_text()
            .set_font(FONT_NAME, size)
            .set_fill_rgb(color.r, color.g, color.b)
            .next_line(x, y)
            .show(Str(&encoded))
            .end_text();
    }

    /// Draw a straight line on the current page.
    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Color) {
        let index = self.pages.len() - 1;
        let content = &mut self.pages[index];
        content.save_state();
        content.set_line_width(thickness);
        content.set_stroke_rgb(color.r, color.g, color.b);
        content.move_to(from.0, from.1);
        content.line_to(to.0, to.1);
        content.stroke();
        content.restore_state();
    }

    /// Assemble the PDF and return its bytes.
    pub fn finish(self, title: &str, created: DateTime<Utc>, compress: bool) -> Result<Vec<u8>> {
        let mut pdf = Pdf::new();
        let mut next_id = 1i32;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };

        let catalog_id = alloc();
        let pages_id = alloc();
        let font_id = alloc();
        let info_id = alloc();

        let n = self.pages.len();
        let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
        let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(n as i32);

        // Helvetica is one of the standard 14 fonts, so no font data
        // is embedded; WinAnsi covers the bullet glyph.
        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        pdf.document_info(info_id)
            .title(TextStr(title))
            .producer(TextStr(PRODUCER))
            .creation_date(to_pdf_date(created));

        for (i, content) in self.pages.into_iter().enumerate() {
            let raw = content.finish();
            if compress {
                let compressed = deflate(&raw)?;
                pdf.stream(content_ids[i], &compressed)
                    .filter(Filter::FlateDecode);
            } else {
                pdf.stream(content_ids[i], &raw);
            }
        }

        for i in 0..n {
            let mut page = pdf.page(page_ids[i]);
            page.media_box(Rect::new(0.0, 0.0, self.width, self.height))
                .parent(pages_id)
                .contents(content_ids[i]);
            page.resources().fonts().pair(FONT_NAME, font_id);
        }

        Ok(pdf.finish())
    }
}

/// Encode text as WinAnsi bytes.
///
/// The classifier keeps body text ASCII, so the only non-ASCII char
/// this ever sees is the bullet glyph; anything else becomes '?'.
fn to_winansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            c if c.is_ascii() => c as u8,
            '•' => 0x95,
            _ => b'?',
        })
        .collect()
}

fn to_pdf_date(created: DateTime<Utc>) -> Date {
    Date::new(created.year().clamp(0, u16::MAX as i32) as u16)
        .month(created.month() as u8)
        .day(created.day() as u8)
        .hour(created.hour() as u8)
        .minute(created.minute() as u8)
        .second(created.second() as u8)
}

fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| Error::Compression(e.to_string()))?;
    encoder.finish().map_err(|e| Error::Compression(e.to_string()))
}
