//! Failure Policy Value Object
//!
//! What the caller of the build hook does when the notification could not be
//! sent at all. Non-200 responses never reach this decision.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Treatment of a transport failure by the build step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Report on the warning channel, let the build succeed (default)
    #[default]
    Warn,
    /// Fail the build step
    Fail,
}

impl FailurePolicy {
    pub const VALID_VALUES: &'static [&'static str] = &["warn", "fail"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "warn" | "warning" => Some(FailurePolicy::Warn),
            "fail" | "error" => Some(FailurePolicy::Fail),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::Warn => "warn",
            FailurePolicy::Fail => "fail",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "invalid policy '{}' (expected one of: {})",
                s,
                Self::VALID_VALUES.join(", ")
            )
        })
    }
}
