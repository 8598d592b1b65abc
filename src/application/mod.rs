//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeploymentNotifier` - One deploy POST and its outcome
//! - `RollbarDeployPlugin` - Build hook that runs the notifier once

pub mod notify;
pub mod plugin;

pub use notify::DeploymentNotifier;
pub use plugin::{settle, BuildPlugin, DeployOptions, HookStatus, RollbarDeployPlugin};
