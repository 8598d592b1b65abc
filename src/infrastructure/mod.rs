//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `http/` - reqwest multipart transport
//! - `events/` - Notice sinks (console, NDJSON)

pub mod events;
pub mod http;

// Re-export for convenience
pub use events::{ConsoleNoticeSink, JsonNoticeSink};
pub use http::ReqwestTransport;
