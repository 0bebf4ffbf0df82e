//! Markdown parsing module.

mod classifier;
mod markdown_parser;

pub use classifier::{ClassifiedLine, LineClassifier, LineKind};
pub use markdown_parser::{MarkdownParser, SectionCollector, SectionSink};
