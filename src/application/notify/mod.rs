//! Notify Module
//!
//! Sends one deploy notification and turns the reply into a
//! `SubmissionOutcome`.
//!
//! ## Usage
//!
//! ```ignore
//! use rollbar_deploy::application::notify::DeploymentNotifier;
//!
//! let notifier = DeploymentNotifier::new(ReqwestTransport::new()?, sink);
//! let outcome = notifier.submit(&request).await?;
//! ```

mod use_case;

pub use use_case::DeploymentNotifier;
