//! Domain Entities
//!
//! - `DeploymentRequest` - everything one deploy notification needs
//! - `FormField` - a named multipart field on the wire

mod deployment;

pub use deployment::{DeploymentRequest, DeploymentRequestBuilder, FormField, ROLLBAR_ENDPOINT};
