//! reqwest-backed deploy transport
//!
//! Sends the form as `multipart/form-data`. The response body is handed back
//! unread; `Response::chunk` streams it so the connection returns to the pool
//! once the notifier reaches end of stream.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::Form;
use reqwest::{Client, Response};

use crate::domain::entities::FormField;
use crate::domain::ports::{DeployTransport, ResponseBody, TransportResponse};
use crate::error::{NotifyError, NotifyResult, TransportError};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Multipart HTTPS transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Client with reqwest's default timeouts (none).
    pub fn new() -> NotifyResult<Self> {
        Self::with_timeout(None)
    }

    /// Client with an overall request timeout.
    ///
    /// A client that can't be built is a setup error, never a transport one.
    pub fn with_timeout(timeout: Option<Duration>) -> NotifyResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| NotifyError::HttpClient(TransportError::from_source(e)))?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DeployTransport for ReqwestTransport {
    async fn post_form(
        &self,
        endpoint: &str,
        fields: Vec<FormField>,
    ) -> Result<TransportResponse, TransportError> {
        let form = fields
            .into_iter()
            .fold(Form::new(), |form, field| form.text(field.name, field.value));

        let response = self
            .client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(TransportError::from_source)?;

        let status = response.status().as_u16();
        Ok(TransportResponse::new(status, Box::new(ReqwestBody(response))))
    }
}

struct ReqwestBody(Response);

#[async_trait]
impl ResponseBody for ReqwestBody {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, TransportError> {
        self.0.chunk().await.map_err(TransportError::from_source)
    }
}
