//! Notice Sink Implementations
//!
//! Provides concrete implementations of NoticeSink:
//! - ConsoleNoticeSink: plain lines for people
//! - JsonNoticeSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::ConsoleNoticeSink;
pub use json::JsonNoticeSink;
