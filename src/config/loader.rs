//! Configuration loading and layering

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::value_objects::FailurePolicy;
use crate::error::{NotifyError, NotifyResult};

use super::env_validator::{closest, parse_bool, EnvVarValidator, BOOL_VALUES};
use super::types::Config;

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "rollbar-deploy.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Where config files are looked up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigPaths {
    /// `$XDG_CONFIG_HOME/rollbar-deploy/config.toml`
    pub user: Option<PathBuf>,
    /// Project file
    pub project: Option<PathBuf>,
    /// Project file was named explicitly and must exist
    pub project_required: bool,
}

impl ConfigPaths {
    /// Standard locations, or `explicit` in place of the project file.
    pub fn discover(explicit: Option<PathBuf>, cwd: &Path) -> Self {
        let project_required = explicit.is_some();
        Self {
            user: user_config_dir().map(|d| d.join("rollbar-deploy/config.toml")),
            project: Some(explicit.unwrap_or_else(|| cwd.join(PROJECT_CONFIG_FILE))),
            project_required,
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> NotifyResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NotifyError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: closest(&key, KNOWN_KEYS).map(str::to_string),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// User file, then project file. Missing files are skipped unless required.
pub fn load_layered(paths: &ConfigPaths) -> NotifyResult<(Config, Vec<ConfigWarning>)> {
    let mut config = Config::default();
    let mut warnings = Vec::new();

    if let Some(user) = paths.user.as_deref().filter(|p| p.is_file()) {
        debug!(path = %user.display(), "loading user config");
        let (layer, layer_warnings) = load_with_warnings(user)?;
        config = config.merge(layer);
        warnings.extend(layer_warnings);
    }

    if let Some(project) = paths.project.as_deref() {
        if project.is_file() || paths.project_required {
            debug!(path = %project.display(), "loading project config");
            let (layer, layer_warnings) = load_with_warnings(project)?;
            config = config.merge(layer);
            warnings.extend(layer_warnings);
        }
    }

    Ok((config, warnings))
}

/// Apply `ROLLBAR_*` overrides read through `lookup`. Empty values count as unset.
pub fn env_overrides_from<F, W>(mut config: Config, lookup: F, warnings: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(token) = get("ROLLBAR_ACCESS_TOKEN") {
        config.deploy.access_token = Some(token);
    }
    if let Some(revision) = get("ROLLBAR_REVISION") {
        config.deploy.revision = Some(revision);
    }
    if let Some(environment) = get("ROLLBAR_ENVIRONMENT") {
        config.deploy.environment = Some(environment);
    }
    if let Some(username) = get("ROLLBAR_LOCAL_USERNAME") {
        config.deploy.local_username = Some(username);
    }
    if let Some(endpoint) = get("ROLLBAR_ENDPOINT") {
        config.deploy.endpoint = Some(endpoint);
    }

    if let Some(raw) = get("ROLLBAR_DEPLOY_SILENT") {
        let validator = EnvVarValidator::new("ROLLBAR_DEPLOY_SILENT", BOOL_VALUES);
        if let Some(silent) = validator.parse(&raw, parse_bool, warnings) {
            config.deploy.silent = Some(silent);
        }
    }

    if let Some(raw) = get("ROLLBAR_DEPLOY_ON_TRANSPORT_ERROR") {
        let validator = EnvVarValidator::new(
            "ROLLBAR_DEPLOY_ON_TRANSPORT_ERROR",
            FailurePolicy::VALID_VALUES,
        );
        if let Some(policy) = validator.parse(&raw, FailurePolicy::parse, warnings) {
            config.hook.on_transport_error = Some(policy);
        }
    }

    if let Some(raw) = get("ROLLBAR_DEPLOY_TIMEOUT_SECS") {
        match raw.trim().parse::<u64>() {
            Ok(secs) => config.http.timeout_secs = Some(secs),
            Err(_) => {
                let _ = writeln!(
                    warnings,
                    "Warning: Invalid ROLLBAR_DEPLOY_TIMEOUT_SECS value '{}' (expected whole seconds)",
                    raw
                );
            }
        }
    }

    config
}

/// Get XDG config directory
fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// Line of `key = ...` or of a `[key]` / `[parent.key]` table header.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start();
            if let Some(rest) = line.strip_prefix(key) {
                return rest.trim_start().starts_with('=');
            }
            line.strip_prefix('[')
                .and_then(|header| header.trim_end().strip_suffix(']'))
                .and_then(|header| header.rsplit('.').next())
                .is_some_and(|last| last.trim() == key)
        })
        .map(|i| i + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "deploy",
    "access_token",
    "revision",
    "environment",
    "local_username",
    "silent",
    "endpoint",
    "hook",
    "on_transport_error",
    "http",
    "timeout_secs",
];
