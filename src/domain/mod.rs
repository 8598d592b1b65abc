//! Domain Layer
//!
//! The deployment model and the ports the notifier talks through.
//!
//! ## Structure
//!
//! - `entities/` - `DeploymentRequest` and its multipart form fields
//! - `value_objects/` - `AccessToken`, `SubmissionOutcome`, `FailurePolicy`
//! - `ports/` - `DeployTransport` (HTTP) and `NoticeSink` (user-facing output)
//!
//! Nothing in here opens a socket or writes to a terminal; infrastructure
//! provides the implementations.

pub mod entities;
pub mod ports;
pub mod value_objects;
