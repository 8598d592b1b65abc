//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod access_token;
mod failure_policy;
mod outcome;

pub use access_token::AccessToken;
pub use failure_policy::FailurePolicy;
pub use outcome::SubmissionOutcome;
