//! Common test utilities for rollbar-deploy integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project and config directories plus a CLI runner
//! - `DeployServer`: Local stand-in for the Rollbar deploy API

#![allow(dead_code)]

pub mod env;
pub mod server;

pub use env::*;
pub use server::*;

/// A token that passes validation
pub const TEST_TOKEN: &str = "aaaabbbbccccddddeeeeffff00001111";

/// Revision used across fixtures
pub const TEST_REVISION: &str = "df6a46e5465e465d4fa6";
