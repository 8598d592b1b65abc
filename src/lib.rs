//! rollbar-deploy - tell Rollbar that a build has shipped
//!
//! A deployment notice is a single multipart POST carrying the access token,
//! the revision and the environment (plus, optionally, who deployed). The
//! library exposes the notifier itself, a build-hook wrapper around it and the
//! layered configuration used by the `rollbar-deploy` binary.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    settle, BuildPlugin, DeployOptions, DeploymentNotifier, HookStatus, RollbarDeployPlugin,
};
pub use config::{Config, Settings};
pub use domain::entities::{DeploymentRequest, DeploymentRequestBuilder, ROLLBAR_ENDPOINT};
pub use domain::ports::{DeployNotice, DeployTransport, NoticeSink};
pub use domain::value_objects::{AccessToken, FailurePolicy, SubmissionOutcome};
pub use error::{NotifyError, NotifyResult, TransportError};
pub use infrastructure::{ConsoleNoticeSink, JsonNoticeSink, ReqwestTransport};
