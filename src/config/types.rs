//! Configuration type definitions
//!
//! Every field is optional so that layers (user file, project file, env, CLI)
//! can be merged before anything is required.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::DeployOptions;
use crate::domain::entities::ROLLBAR_ENDPOINT;
use crate::domain::value_objects::FailurePolicy;
use crate::error::{NotifyError, NotifyResult};

use super::loader::{self, ConfigWarning};

/// `[deploy]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DeploySection {
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default)]
    pub revision: Option<String>,

    #[serde(default)]
    pub environment: Option<String>,

    #[serde(default)]
    pub local_username: Option<String>,

    #[serde(default)]
    pub silent: Option<bool>,

    #[serde(default)]
    pub endpoint: Option<String>,
}

/// `[hook]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HookSection {
    #[serde(default)]
    pub on_transport_error: Option<FailurePolicy>,
}

/// `[http]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HttpSection {
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeploySection,

    #[serde(default)]
    pub hook: HookSection,

    #[serde(default)]
    pub http: HttpSection,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub options: DeployOptions,
    pub policy: FailurePolicy,
    pub timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> NotifyResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> NotifyResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Overlay `higher` on top of `self`. Set values in `higher` win.
    pub fn merge(self, higher: Config) -> Config {
        Config {
            deploy: DeploySection {
                access_token: higher.deploy.access_token.or(self.deploy.access_token),
                revision: higher.deploy.revision.or(self.deploy.revision),
                environment: higher.deploy.environment.or(self.deploy.environment),
                local_username: higher.deploy.local_username.or(self.deploy.local_username),
                silent: higher.deploy.silent.or(self.deploy.silent),
                endpoint: higher.deploy.endpoint.or(self.deploy.endpoint),
            },
            hook: HookSection {
                on_transport_error: higher
                    .hook
                    .on_transport_error
                    .or(self.hook.on_transport_error),
            },
            http: HttpSection {
                timeout_secs: higher.http.timeout_secs.or(self.http.timeout_secs),
            },
        }
    }

    /// Fill defaults and require the three mandatory deploy fields.
    pub fn into_settings(self) -> NotifyResult<Settings> {
        let deploy = self.deploy;
        let access_token = deploy.access_token.ok_or(NotifyError::MissingField {
            field: "access_token",
        })?;
        let revision = deploy
            .revision
            .ok_or(NotifyError::MissingField { field: "revision" })?;
        let environment = deploy.environment.ok_or(NotifyError::MissingField {
            field: "environment",
        })?;

        let mut options = DeployOptions::new(access_token, revision, environment)
            .with_silent(deploy.silent.unwrap_or(false))
            .with_endpoint(deploy.endpoint.unwrap_or_else(|| ROLLBAR_ENDPOINT.to_string()));
        options.local_username = deploy.local_username;

        Ok(Settings {
            options,
            policy: self.hook.on_transport_error.unwrap_or_default(),
            timeout: self.http.timeout_secs.map(Duration::from_secs),
        })
    }
}
