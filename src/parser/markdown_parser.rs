//! Section accumulation over the classified line stream.

use crate::model::Section;
use crate::parser::classifier::{LineClassifier, LineKind};

/// Receives sections as the parser completes them.
///
/// The PDF renderer implements this to draw each section the moment it
/// is flushed, so at most one section is in flight at a time.
/// [`SectionCollector`] implements it to build a full model instead.
///
/// A flushed section may carry an empty heading (stray content at end
/// of input); sinks are expected to ignore those.
pub trait SectionSink {
    /// Consume one flushed section.
    fn section(&mut self, section: Section);
}

/// Collects flushed sections into a vector, dropping heading-less ones
/// the same way the renderer would.
#[derive(Debug, Default)]
pub struct SectionCollector {
    sections: Vec<Section>,
}

impl SectionCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the collector and return the sections in order.
    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }
}

impl SectionSink for SectionCollector {
    fn section(&mut self, section: Section) {
        if !section.has_heading() {
            return;
        }
        self.sections.push(section);
    }
}

/// Streaming parser for the schedule Markdown dialect.
///
/// Classifies lines, groups them into one in-progress [`Section`], and
/// flushes that section to the sink when a new heading arrives or the
/// input ends. Parsing never fails: unrecognized lines degrade into
/// continuations or blanks.
pub struct MarkdownParser<S: SectionSink> {
    classifier: LineClassifier,
    sink: S,
    current: Section,
}

impl<S: SectionSink> MarkdownParser<S> {
    /// Create a parser that suppresses echoes of `title` and feeds
    /// flushed sections into `sink`.
    pub fn new(title: &str, sink: S) -> Self {
        Self {
            classifier: LineClassifier::new(title),
            sink,
            current: Section::new(),
        }
    }

    /// Feed a whole Markdown document.
    pub fn feed(&mut self, markdown: &str) {
        for line in markdown.split('\n') {
            self.feed_line(line);
        }
    }

    /// Feed a single raw line.
    pub fn feed_line(&mut self, raw: &str) {
        let line = self.classifier.classify(raw);
        match line.kind {
            LineKind::Heading => {
                // Content seen before the first heading stays in the
                // section and rides into it, so only a section that
                // already has a heading is flushed here.
                if self.current.has_heading() {
                    self.flush();
                }
                self.current.heading = line.text;
            }
            LineKind::BoldLabel => {
                self.current.time_label = line.text;
            }
            LineKind::Bullet => {
                self.current.bullets.push(line.text);
            }
            LineKind::Continuation => match self.current.bullets.last_mut() {
                Some(last) => {
                    last.push(' ');
                    last.push_str(&line.text);
                }
                None => self.current.bullets.push(line.text),
            },
            LineKind::CodeFence | LineKind::TitleEcho | LineKind::Blank => {}
        }
    }

    /// Flush the in-progress section unconditionally and return the
    /// sink. Must be called exactly once, after the last line.
    pub fn finish(mut self) -> S {
        self.flush();
        self.sink
    }

    fn flush(&mut self) {
        let section = std::mem::take(&mut self.current);
        self.sink.section(section);
    }
}
