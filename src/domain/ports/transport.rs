//! Deploy Transport Port
//!
//! One multipart POST and a streaming response body. Any failure before a
//! status line arrives is a `TransportError`.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::entities::FormField;
use crate::error::TransportError;

/// Sends a deploy form and hands back the raw response
#[async_trait]
pub trait DeployTransport: Send + Sync {
    async fn post_form(
        &self,
        endpoint: &str,
        fields: Vec<FormField>,
    ) -> Result<TransportResponse, TransportError>;
}

/// Response body read chunk by chunk
///
/// `Ok(None)` is end of stream. The connection is only released once the
/// stream has been read to the end or dropped.
#[async_trait]
pub trait ResponseBody: Send {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, TransportError>;
}

/// Status code plus an unread body
pub struct TransportResponse {
    status: u16,
    body: Box<dyn ResponseBody>,
}

impl TransportResponse {
    pub fn new(status: u16, body: Box<dyn ResponseBody>) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn into_body(self) -> Box<dyn ResponseBody> {
        self.body
    }
}

impl std::fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
