//! Test environment builder for isolated rollbar-deploy runs.
//!
//! Provides `TestEnv` - temp directories for the project and for
//! `XDG_CONFIG_HOME`, plus helpers to run the CLI with a scrubbed environment.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Variables the CLI reads; removed from every child so the host can't leak in.
const SCRUBBED_VARS: &[&str] = &[
    "ROLLBAR_ACCESS_TOKEN",
    "ROLLBAR_REVISION",
    "ROLLBAR_ENVIRONMENT",
    "ROLLBAR_LOCAL_USERNAME",
    "ROLLBAR_ENDPOINT",
    "ROLLBAR_DEPLOY_SILENT",
    "ROLLBAR_DEPLOY_ON_TRANSPORT_ERROR",
    "ROLLBAR_DEPLOY_TIMEOUT_SECS",
    "RUST_LOG",
];

/// Result of running a CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    /// Working directory for the run
    pub project_root: TempDir,
    /// Stands in for `XDG_CONFIG_HOME` and `HOME`
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("project dir"),
            config_home: TempDir::new().expect("config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_rollbar-deploy")),
        }
    }

    /// Write `rollbar-deploy.toml` into the project directory
    pub fn with_project_config(self, content: &str) -> Self {
        std::fs::write(self.project_path("rollbar-deploy.toml"), content)
            .expect("write project config");
        self
    }

    /// Write the user-level config file
    pub fn with_user_config(self, content: &str) -> Self {
        let dir = self.config_home.path().join("rollbar-deploy");
        std::fs::create_dir_all(&dir).expect("create user config dir");
        std::fs::write(dir.join("config.toml"), content).expect("write user config");
        self
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("HOME", self.config_home.path());

        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute rollbar-deploy");
        to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
