//! Output Rendering
//!
//! Text and JSON renderings of resolved settings and config warnings for the
//! `check` command. Deploy notices themselves go through the notice sinks.

use std::fmt::Write as _;

use crate::config::{ConfigWarning, Settings};
use crate::domain::entities::DeploymentRequest;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render the validated request and hook settings. The token is masked.
pub fn render_settings(
    request: &DeploymentRequest,
    settings: &Settings,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => render_settings_text(request, settings),
        OutputFormat::Json => {
            let event = serde_json::json!({
                "event": "data",
                "command": "check",
                "endpoint": request.endpoint(),
                "access_token": request.access_token().masked(),
                "revision": request.revision(),
                "environment": request.environment(),
                "local_username": request.local_username(),
                "silent": request.silent(),
                "on_transport_error": settings.policy.as_str(),
                "timeout_secs": settings.timeout.map(|t| t.as_secs()),
            });
            format!("{}\n", event)
        }
    }
}

fn render_settings_text(request: &DeploymentRequest, settings: &Settings) -> String {
    let mut out = String::new();
    let rows = [
        ("endpoint", request.endpoint().to_string()),
        ("access_token", request.access_token().masked()),
        ("revision", request.revision().to_string()),
        ("environment", request.environment().to_string()),
        (
            "local_username",
            request.local_username().unwrap_or("(none)").to_string(),
        ),
        ("silent", request.silent().to_string()),
        ("on_transport_error", settings.policy.to_string()),
        (
            "timeout",
            settings
                .timeout
                .map(|t| format!("{}s", t.as_secs()))
                .unwrap_or_else(|| "(none)".to_string()),
        ),
    ];

    for (key, value) in rows {
        let _ = writeln!(out, "{:<20}{}", key, value);
    }
    out
}

/// One line per warning, with file location and a suggestion when known.
pub fn render_config_warning(warning: &ConfigWarning, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let location = match warning.line {
                Some(line) => format!("{}:{}", warning.file.display(), line),
                None => warning.file.display().to_string(),
            };
            let hint = warning
                .suggestion
                .as_deref()
                .map(|s| format!(" (did you mean '{}'?)", s))
                .unwrap_or_default();
            format!("warning: unknown config key '{}' in {}{}\n", warning.key, location, hint)
        }
        OutputFormat::Json => {
            let event = serde_json::json!({
                "event": "config_warning",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            });
            format!("{}\n", event)
        }
    }
}
