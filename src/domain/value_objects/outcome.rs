//! Submission Outcome
//!
//! The resolved value of one deploy notification. Both variants are success
//! from the build's point of view.

/// How the tracking service answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// HTTP 200, body ignored
    Acknowledged,
    /// Any other status; body kept for the log
    NotAcknowledged { status: u16, body: String },
}

impl SubmissionOutcome {
    pub fn is_acknowledged(&self) -> bool {
        matches!(self, SubmissionOutcome::Acknowledged)
    }

    pub fn status(&self) -> u16 {
        match self {
            SubmissionOutcome::Acknowledged => 200,
            SubmissionOutcome::NotAcknowledged { status, .. } => *status,
        }
    }
}
