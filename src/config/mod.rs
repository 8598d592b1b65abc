//! Configuration module for rollbar-deploy
//!
//! Layers, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (ROLLBAR_*)
//! 3. Project config (./rollbar-deploy.toml or --config)
//! 4. User config (~/.config/rollbar-deploy/config.toml)
//! 5. Built-in defaults

mod env_validator;
mod loader;
mod types;

pub use loader::{env_overrides_from, load_layered, ConfigPaths, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, DeploySection, HookSection, HttpSection, Settings};
