//! Deployment Request Entity
//!
//! One deploy notification: where to send it, what to send, and whether the
//! success line should be printed. Immutable once built.

use reqwest::Url;

use crate::domain::value_objects::AccessToken;
use crate::error::{NotifyError, NotifyResult};

/// Rollbar's deploy API
pub const ROLLBAR_ENDPOINT: &str = "https://api.rollbar.com/api/1/deploy";

/// A named multipart form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub value: String,
}

impl FormField {
    fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// A fully validated deploy notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    endpoint: String,
    access_token: AccessToken,
    revision: String,
    environment: String,
    local_username: Option<String>,
    silent: bool,
}

impl DeploymentRequest {
    pub fn builder() -> DeploymentRequestBuilder {
        DeploymentRequestBuilder::default()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn local_username(&self) -> Option<&str> {
        self.local_username.as_deref()
    }

    pub fn silent(&self) -> bool {
        self.silent
    }

    /// Multipart fields in submission order.
    ///
    /// `local_username` comes first and only when set.
    pub fn form_fields(&self) -> Vec<FormField> {
        let mut fields = Vec::with_capacity(4);
        if let Some(username) = &self.local_username {
            fields.push(FormField::new("local_username", username.as_str()));
        }
        fields.push(FormField::new("access_token", self.access_token.as_str()));
        fields.push(FormField::new("revision", self.revision.as_str()));
        fields.push(FormField::new("environment", self.environment.as_str()));
        fields
    }
}

/// Builder that enforces the required fields
#[derive(Debug, Clone, Default)]
pub struct DeploymentRequestBuilder {
    endpoint: Option<String>,
    access_token: Option<String>,
    revision: Option<String>,
    environment: Option<String>,
    local_username: Option<String>,
    silent: bool,
}

impl DeploymentRequestBuilder {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn local_username(mut self, username: Option<String>) -> Self {
        self.local_username = username;
        self
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn build(self) -> NotifyResult<DeploymentRequest> {
        let access_token = self
            .access_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or(NotifyError::MissingField {
                field: "access_token",
            })
            .and_then(AccessToken::parse)?;
        let revision = required(self.revision, "revision")?;
        let environment = required(self.environment, "environment")?;

        let endpoint = self
            .endpoint
            .unwrap_or_else(|| ROLLBAR_ENDPOINT.to_string());
        validate_endpoint(&endpoint)?;

        // A blank username is the same as no username.
        let local_username = self.local_username.filter(|u| !u.trim().is_empty());

        Ok(DeploymentRequest {
            endpoint,
            access_token,
            revision,
            environment,
            local_username,
            silent: self.silent,
        })
    }
}

/// Present and not blank. The value itself is sent as given.
fn required(value: Option<String>, field: &'static str) -> NotifyResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(NotifyError::MissingField { field })
}

fn validate_endpoint(endpoint: &str) -> NotifyResult<()> {
    let url = Url::parse(endpoint).map_err(|e| NotifyError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(NotifyError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
