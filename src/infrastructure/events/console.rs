//! Console Notice Sink
//!
//! Plain lines on stdout, the way a build log shows them.

use crate::domain::ports::{DeployNotice, NoticeSink, ACKNOWLEDGED_MESSAGE, NOT_ACKNOWLEDGED_PREFIX};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that prints human-readable lines
pub struct ConsoleNoticeSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleNoticeSink {
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a console sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_lines(&self, lines: &[&str]) {
        if let Ok(mut writer) = self.writer.lock() {
            for line in lines {
                let _ = writeln!(writer, "{}", line);
            }
            let _ = writer.flush();
        }
    }
}

impl NoticeSink for ConsoleNoticeSink {
    fn on_notice(&self, notice: DeployNotice) {
        match notice {
            DeployNotice::Acknowledged { .. } => self.write_lines(&[ACKNOWLEDGED_MESSAGE]),
            DeployNotice::NotAcknowledged { body, .. } => {
                self.write_lines(&[NOT_ACKNOWLEDGED_PREFIX, &body])
            }
        }
    }
}
