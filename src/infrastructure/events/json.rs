//! JSON Notice Sink
//!
//! Outputs deploy notices as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployNotice, NoticeSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonNoticeSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonNoticeSink {
    /// Create a new JSON sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl NoticeSink for JsonNoticeSink {
    fn on_notice(&self, notice: DeployNotice) {
        let json = match notice {
            DeployNotice::Acknowledged {
                environment,
                revision,
            } => {
                serde_json::json!({
                    "event": "deploy_acknowledged",
                    "command": "notify",
                    "environment": environment,
                    "revision": revision,
                })
            }

            DeployNotice::NotAcknowledged { status, body } => {
                serde_json::json!({
                    "event": "deploy_not_acknowledged",
                    "command": "notify",
                    "status": status,
                    "body": body,
                })
            }
        };

        self.write_event(json);
    }
}
