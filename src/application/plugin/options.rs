//! Deploy Options
//!
//! Raw plugin settings, as given by the caller. Validation happens when they
//! are turned into a `DeploymentRequest`.

use crate::domain::entities::{DeploymentRequest, ROLLBAR_ENDPOINT};
use crate::error::NotifyResult;

/// Options for the deploy plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// Rollbar project access token (`post_server_item`)
    pub access_token: String,
    /// Revision being deployed, usually a commit SHA
    pub revision: String,
    /// Environment name (production, staging, ...)
    pub environment: String,
    /// User who ran the deploy
    pub local_username: Option<String>,
    /// Suppress the success line
    pub silent: bool,
    /// Deploy API URL
    pub endpoint: String,
}

impl DeployOptions {
    pub fn new(
        access_token: impl Into<String>,
        revision: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            revision: revision.into(),
            environment: environment.into(),
            local_username: None,
            silent: false,
            endpoint: ROLLBAR_ENDPOINT.to_string(),
        }
    }

    pub fn with_local_username(mut self, username: impl Into<String>) -> Self {
        self.local_username = Some(username.into());
        self
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn to_request(&self) -> NotifyResult<DeploymentRequest> {
        DeploymentRequest::builder()
            .endpoint(self.endpoint.as_str())
            .access_token(self.access_token.as_str())
            .revision(self.revision.as_str())
            .environment(self.environment.as_str())
            .local_username(self.local_username.clone())
            .silent(self.silent)
            .build()
    }
}
