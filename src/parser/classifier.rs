//! Line classification for the schedule Markdown dialect.

use regex::Regex;

/// The role a single Markdown line plays in a schedule document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `##`/`###` heading, starts a new section
    Heading,
    /// Whole line wrapped in `**`, a time range label
    BoldLabel,
    /// `- ` list item
    Bullet,
    /// Bare text, merged into the previous bullet
    Continuation,
    /// Code fence marker, dropped
    CodeFence,
    /// Line repeating the document title, dropped
    TitleEcho,
    /// Empty after trimming and ASCII filtering
    Blank,
}

/// A line with its classification and marker-stripped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// Text with Markdown markers already stripped
    pub text: String,
    /// How the accumulator should treat this line
    pub kind: LineKind,
}

impl ClassifiedLine {
    fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Classifies lines of the constrained schedule Markdown dialect.
///
/// Classification is a pure function of the line content and the
/// document title. Rules are checked in priority order and the first
/// match wins, so a heading that repeats the title is a [`LineKind::TitleEcho`],
/// not a [`LineKind::Heading`].
pub struct LineClassifier {
    /// Title after the same normalization applied to lines
    normalized_title: String,
    /// Removes everything outside word chars, whitespace, hyphen
    normalize_regex: Regex,
    /// Strips leading `#` markers and the whitespace after them
    heading_regex: Regex,
    /// Matches one inline `**bold**` span, lazily
    bold_regex: Regex,
}

impl LineClassifier {
    /// Create a classifier for a document with the given title.
    pub fn new(title: &str) -> Self {
        let normalize_regex = Regex::new(r"[^\w\s-]").unwrap();
        let normalized_title = normalize(&normalize_regex, title);
        Self {
            normalized_title,
            normalize_regex,
            heading_regex: Regex::new(r"^#+\s*").unwrap(),
            bold_regex: Regex::new(r"\*\*(.*?)\*\*").unwrap(),
        }
    }

    /// Classify one raw input line.
    ///
    /// The line is trimmed and filtered to printable ASCII first, so
    /// emoji and other non-Latin characters never reach the output.
    pub fn classify(&self, raw: &str) -> ClassifiedLine {
        let clean = strip_non_ascii(raw.trim());

        if clean.starts_with("```") {
            log::debug!("dropping code fence marker");
            return ClassifiedLine::new(clean, LineKind::CodeFence);
        }

        // An empty title would make every line an echo, so it disables
        // the check instead.
        if !self.normalized_title.is_empty()
            && normalize(&self.normalize_regex, &clean).contains(&self.normalized_title)
        {
            log::debug!("dropping title echo: {:?}", clean);
            return ClassifiedLine::new(clean, LineKind::TitleEcho);
        }

        if clean.starts_with("###") || clean.starts_with("##") {
            let text = self.heading_regex.replace(&clean, "").trim().to_string();
            return ClassifiedLine::new(text, LineKind::Heading);
        }

        if clean.starts_with("**") && clean.ends_with("**") {
            let text = clean.replace("**", "").trim().to_string();
            return ClassifiedLine::new(text, LineKind::BoldLabel);
        }

        if let Some(rest) = clean.strip_prefix("- ") {
            let text = self.strip_bold(rest);
            return ClassifiedLine::new(text, LineKind::Bullet);
        }

        if !clean.is_empty() {
            let text = self.strip_bold(&clean);
            return ClassifiedLine::new(text, LineKind::Continuation);
        }

        ClassifiedLine::new(clean, LineKind::Blank)
    }

    /// Reduce inline `**bold**` spans to their inner text and trim.
    fn strip_bold(&self, text: &str) -> String {
        self.bold_regex.replace_all(text, "$1").trim().to_string()
    }
}

/// Drop every character outside the ASCII range.
fn strip_non_ascii(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii()).collect()
}

/// Normalization shared by the title and each line for echo detection.
///
/// Hyphens compare equal to spaces so a reworded echo like
/// "3 Month Old Sleep Schedule" still matches the hyphenated title.
fn normalize(normalize_regex: &Regex, text: &str) -> String {
    let ascii = strip_non_ascii(text);
    normalize_regex
        .replace_all(&ascii, "")
        .replace('-', " ")
        .to_lowercase()
}
