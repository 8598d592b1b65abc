//! Plugin Module
//!
//! The build-lifecycle side: a plugin the build invokes once its output is
//! written, and the policy that decides what a failed notification means for
//! the build.
//!
//! ## Structure
//!
//! - `options` - Plugin settings (`DeployOptions`)
//! - `hook` - `BuildPlugin` trait, `RollbarDeployPlugin`, `HookStatus`

mod hook;
mod options;

pub use hook::{settle, BuildPlugin, HookStatus, RollbarDeployPlugin, PLUGIN_NAME};
pub use options::DeployOptions;
