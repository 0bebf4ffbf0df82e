//! JSON rendering for parsed schedules.

use crate::error::Result;
use crate::model::Schedule;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a schedule to JSON.
pub fn to_json(schedule: &Schedule, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(schedule)?,
        JsonFormat::Compact => serde_json::to_string(schedule)?,
    };
    Ok(json)
}
