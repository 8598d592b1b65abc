//! Notify command handler

use std::path::PathBuf;

use anyhow::Result;

use rollbar_deploy::presentation::factory;
use rollbar_deploy::presentation::output::OutputFormat;
use rollbar_deploy::presentation::DeployArgs;
use rollbar_deploy::{settle, BuildPlugin, HookStatus};

use super::report_config_warnings;

/// Run the deploy hook once and map its result to the process exit status.
///
/// A non-200 reply from Rollbar is reported by the notice sink and still
/// exits 0. A transport failure exits 0 with a warning under the `warn`
/// policy and non-zero under `fail`. Config errors always exit non-zero.
pub async fn cmd_notify(args: &DeployArgs, config_path: Option<PathBuf>, json: bool) -> Result<()> {
    let format = OutputFormat::from_flag(json);
    let cwd = std::env::current_dir()?;

    let (config, warnings) = factory::resolve_config(config_path, &cwd, args.to_config())?;
    report_config_warnings(&warnings, format);

    let settings = config.into_settings()?;
    let sink = factory::create_notice_sink(json);

    let result = match factory::create_deploy_plugin(&settings, sink) {
        Ok(plugin) => plugin.write_bundle().await,
        Err(err) => Err(err),
    };

    match settle(result, settings.policy) {
        HookStatus::Completed => Ok(()),
        HookStatus::Warned(err) => {
            eprintln!("warning: Rollbar deploy notification failed: {}", err);
            Ok(())
        }
        HookStatus::Failed(err) => {
            Err(anyhow::Error::new(err).context("Rollbar deploy notification failed"))
        }
    }
}
