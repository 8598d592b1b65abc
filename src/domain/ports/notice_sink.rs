//! Notice Sink Port
//!
//! User-facing output of a deploy notification goes through this trait so the
//! console, NDJSON and test recorders are interchangeable.

/// Line printed when the service returns 200
pub const ACKNOWLEDGED_MESSAGE: &str = "Rollbar successfully notified of deployment.";

/// Line printed before the response body of a non-200 reply
pub const NOT_ACKNOWLEDGED_PREFIX: &str =
    "Rollbar was not notified of deployment. The response from the api call is:";

/// Notice emitted once per submission that received a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployNotice {
    /// 200 received and `silent` is off
    Acknowledged {
        environment: String,
        revision: String,
    },

    /// Any other status; always emitted
    NotAcknowledged { status: u16, body: String },
}

/// Trait for receiving deploy notices
///
/// Implementations:
/// - ConsoleNoticeSink: plain lines on stdout
/// - JsonNoticeSink: NDJSON for CI
pub trait NoticeSink: Send + Sync {
    fn on_notice(&self, notice: DeployNotice);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingNoticeSink {
        notices: Arc<Mutex<Vec<DeployNotice>>>,
    }

    impl NoticeSink for RecordingNoticeSink {
        fn on_notice(&self, notice: DeployNotice) {
            self.notices.lock().unwrap().push(notice);
        }
    }

    #[test]
    fn sink_is_object_safe_and_records() {
        let notices = Arc::new(Mutex::new(Vec::new()));
        let sink: Arc<dyn NoticeSink> = Arc::new(RecordingNoticeSink {
            notices: notices.clone(),
        });

        sink.on_notice(DeployNotice::NotAcknowledged {
            status: 422,
            body: "{}".to_string(),
        });

        assert_eq!(notices.lock().unwrap().len(), 1);
    }
}
