//! Schedule-level types.

use serde::{Deserialize, Serialize};

/// A parsed sleep schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Display title, also used to suppress title echoes in the body
    pub title: String,

    /// Sections in document order
    pub sections: Vec<Section>,
}

impl Schedule {
    /// Create a new empty schedule with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Add a section to the schedule.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get the total number of bullets across all sections.
    pub fn bullet_count(&self) -> usize {
        self.sections.iter().map(|s| s.bullets.len()).sum()
    }

    /// Check if the schedule has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get plain text content of the entire schedule.
    pub fn plain_text(&self) -> String {
        let mut parts = vec![self.title.clone()];
        parts.extend(self.sections.iter().map(|s| s.plain_text()));
        parts.join("\n\n")
    }
}

/// One renderable block of the schedule: a heading, an optional time
/// label, and the bullets that follow it.
///
/// Empty strings mean "absent". A section with an empty heading is
/// skipped by the renderer, and a time label set to the empty string
/// draws nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text with Markdown markers stripped
    pub heading: String,

    /// Time range label, e.g. "06:30 AM - 08:00 AM"
    pub time_label: String,

    /// Bullet texts with list markers and inline bold stripped
    pub bullets: Vec<String>,
}

impl Section {
    /// Create a new empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the section has a heading.
    pub fn has_heading(&self) -> bool {
        !self.heading.is_empty()
    }

    /// Check if the section has a time label.
    pub fn has_time_label(&self) -> bool {
        !self.time_label.is_empty()
    }

    /// Get the number of bullets.
    pub fn bullet_count(&self) -> usize {
        self.bullets.len()
    }

    /// Check if the section carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.heading.is_empty() && self.time_label.is_empty() && self.bullets.is_empty()
    }

    /// Get plain text content of the section.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::new();
        if !self.heading.is_empty() {
            lines.push(self.heading.clone());
        }
        if !self.time_label.is_empty() {
            lines.push(self.time_label.clone());
        }
        for bullet in &self.bullets {
            lines.push(format!("• {}", bullet));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_new() {
        let schedule = Schedule::new("Sleep Schedule");
        assert!(schedule.is_empty());
        assert_eq!(schedule.section_count(), 0);
        assert_eq!(schedule.bullet_count(), 0);
    }

    #[test]
    fn test_section_counts() {
        let mut schedule = Schedule::new("Sleep Schedule");
        let mut section = Section::new();
        section.heading = "Wake-Up".to_string();
        section.bullets.push("Open the blinds".to_string());
        section.bullets.push("Feed baby".to_string());
        schedule.add_section(section);

        assert_eq!(schedule.section_count(), 1);
        assert_eq!(schedule.bullet_count(), 2);
        assert!(!schedule.is_empty());
    }

    #[test]
    fn test_plain_text() {
        let mut section = Section::new();
        section.heading = "Nap".to_string();
        section.time_label = "09:00 AM - 10:30 AM".to_string();
        section.bullets.push("Keep the room dark".to_string());

        let text = section.plain_text();
        assert!(text.contains("Nap"));
        assert!(text.contains("09:00 AM - 10:30 AM"));
        assert!(text.contains("• Keep the room dark"));
    }

    #[test]
    fn test_empty_strings_mean_absent() {
        let section = Section::new();
        assert!(!section.has_heading());
        assert!(!section.has_time_label());
        assert!(section.is_empty());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut schedule = Schedule::new("3-Month-Old Sleep Schedule");
        let mut section = Section::new();
        section.heading = "Bedtime".to_string();
        section.bullets.push("Dim the lights".to_string());
        schedule.add_section(section);

        let json = serde_json::to_string(&schedule).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}
