//! Schedule model types.
//!
//! This module defines the intermediate representation that bridges
//! Markdown parsing and PDF rendering: a flat list of sections, each a
//! heading plus an optional time label and its bullets.

mod schedule;

pub use schedule::{Schedule, Section};
