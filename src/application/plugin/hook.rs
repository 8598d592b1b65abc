//! Build Hook
//!
//! `RollbarDeployPlugin` runs after the bundle is written and awaits exactly
//! one notification. The build step is not complete until that settles.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::notify::DeploymentNotifier;
use crate::domain::ports::{DeployTransport, NoticeSink};
use crate::domain::value_objects::{FailurePolicy, SubmissionOutcome};
use crate::error::{NotifyError, NotifyResult};

use super::options::DeployOptions;

pub const PLUGIN_NAME: &str = "rollbar-deploy";

/// A plugin the build tool calls once after output is written
#[async_trait]
pub trait BuildPlugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Runs after the bundle is on disk.
    async fn write_bundle(&self) -> NotifyResult<()>;
}

/// Notifies Rollbar of the deployment when the bundle is written
pub struct RollbarDeployPlugin<T>
where
    T: DeployTransport,
{
    options: DeployOptions,
    notifier: DeploymentNotifier<T>,
}

impl<T> RollbarDeployPlugin<T>
where
    T: DeployTransport,
{
    pub fn new(options: DeployOptions, transport: T, sink: Arc<dyn NoticeSink>) -> Self {
        Self {
            options,
            notifier: DeploymentNotifier::new(transport, sink),
        }
    }

    pub fn options(&self) -> &DeployOptions {
        &self.options
    }

    /// Validate options and submit, keeping the outcome.
    pub async fn notify(&self) -> NotifyResult<SubmissionOutcome> {
        let request = self.options.to_request()?;
        self.notifier.submit(&request).await
    }
}

#[async_trait]
impl<T> BuildPlugin for RollbarDeployPlugin<T>
where
    T: DeployTransport,
{
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    async fn write_bundle(&self) -> NotifyResult<()> {
        let outcome = self.notify().await?;
        debug!(status = outcome.status(), "deploy hook settled");
        Ok(())
    }
}

/// What the build should do with the hook's result
#[derive(Debug)]
pub enum HookStatus {
    /// Notification sent (acknowledged or not)
    Completed,
    /// Transport failed; report and carry on
    Warned(NotifyError),
    /// Abort the build step
    Failed(NotifyError),
}

impl HookStatus {
    pub fn is_fatal(&self) -> bool {
        matches!(self, HookStatus::Failed(_))
    }
}

/// Apply the failure policy to a settled hook.
///
/// Only transport errors are subject to the policy. Setup errors (missing
/// token, bad endpoint, HTTP client that can't be built) always fail.
pub fn settle(result: NotifyResult<()>, policy: FailurePolicy) -> HookStatus {
    match result {
        Ok(()) => HookStatus::Completed,
        Err(err) if err.is_transport() && policy == FailurePolicy::Warn => {
            warn!(error = %err, "deploy notification not sent");
            HookStatus::Warned(err)
        }
        Err(err) => HookStatus::Failed(err),
    }
}
