//! Event Sink Implementations
//!
//! Provides concrete implementations of PruneEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - TextEventSink: Human-readable progress lines

mod json;
mod text;

pub use json::JsonEventSink;
pub use text::{render_event, render_summary, TextEventSink};
