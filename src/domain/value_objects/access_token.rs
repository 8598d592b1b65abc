//! Access Token Value Object
//!
//! A Rollbar project access token with `post_server_item` scope. Validated once
//! when config is resolved so the notifier never sees an empty token.

use std::fmt;

use crate::error::{NotifyError, NotifyResult};

const MASK: &str = "********";

/// Shorter tokens are masked completely
const MASK_REVEAL_MIN_LEN: usize = 12;

/// Validated Rollbar access token
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Parse and validate a raw token string.
    ///
    /// Surrounding whitespace is trimmed. The remainder must be non-empty and
    /// ASCII alphanumeric.
    pub fn parse(raw: &str) -> NotifyResult<Self> {
        let token = raw.trim();

        if token.is_empty() {
            return Err(NotifyError::InvalidAccessToken {
                reason: "token is empty".to_string(),
            });
        }

        if let Some(bad) = token.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(NotifyError::InvalidAccessToken {
                reason: format!("unexpected character {:?}", bad),
            });
        }

        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fixed mask for display. Tokens of at least `MASK_REVEAL_MIN_LEN`
    /// characters keep their first four so they can be told apart.
    pub fn masked(&self) -> String {
        if self.0.len() < MASK_REVEAL_MIN_LEN {
            return MASK.to_string();
        }
        format!("{}{}", &self.0[..4], MASK)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&self.masked()).finish()
    }
}
