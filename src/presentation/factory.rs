//! Plugin Factory
//!
//! Creates the deploy plugin with infrastructure dependencies wired up.
//! This is the dependency injection point for the binary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::RollbarDeployPlugin;
use crate::config::{self, Config, ConfigPaths, ConfigWarning, Settings};
use crate::domain::ports::NoticeSink;
use crate::error::NotifyResult;
use crate::infrastructure::{ConsoleNoticeSink, JsonNoticeSink, ReqwestTransport};

/// The plugin as the binary runs it
pub type ConcreteDeployPlugin = RollbarDeployPlugin<ReqwestTransport>;

/// Resolve every config layer below the command line, then put `cli` on top.
///
/// Order, lowest first: user file, project file (or `explicit`), `ROLLBAR_*`
/// environment, `cli`.
pub fn resolve_config(
    explicit: Option<PathBuf>,
    cwd: &Path,
    cli: Config,
) -> NotifyResult<(Config, Vec<ConfigWarning>)> {
    let paths = ConfigPaths::discover(explicit, cwd);
    resolve_config_with(
        &paths,
        |key| std::env::var(key).ok(),
        &mut std::io::stderr(),
        cli,
    )
}

/// `resolve_config` over explicit paths and an environment lookup.
pub fn resolve_config_with<F, W>(
    paths: &ConfigPaths,
    lookup: F,
    env_warnings: &mut W,
    cli: Config,
) -> NotifyResult<(Config, Vec<ConfigWarning>)>
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    let (files, warnings) = config::load_layered(paths)?;
    let config = config::env_overrides_from(files, lookup, env_warnings).merge(cli);
    Ok((config, warnings))
}

/// Console lines for people, NDJSON with `--json`
pub fn create_notice_sink(json: bool) -> Arc<dyn NoticeSink> {
    if json {
        Arc::new(JsonNoticeSink::stdout())
    } else {
        Arc::new(ConsoleNoticeSink::stdout())
    }
}

/// Create the deploy plugin for resolved settings
pub fn create_deploy_plugin(
    settings: &Settings,
    sink: Arc<dyn NoticeSink>,
) -> NotifyResult<ConcreteDeployPlugin> {
    let transport = ReqwestTransport::with_timeout(settings.timeout)?;
    Ok(RollbarDeployPlugin::new(
        settings.options.clone(),
        transport,
        sink,
    ))
}
