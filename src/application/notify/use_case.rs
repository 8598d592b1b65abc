//! Deployment Notifier
//!
//! Exactly one POST per call. Outcomes:
//! 1. Transport failure: `Err`, the transport's error as-is
//! 2. HTTP 200: body drained, success notice unless silent, `Ok(Acknowledged)`
//! 3. Any other status: body read in full and always logged, `Ok(NotAcknowledged)`
//!
//! Non-200 is never an error.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::DeploymentRequest;
use crate::domain::ports::{DeployNotice, DeployTransport, NoticeSink, ResponseBody};
use crate::domain::value_objects::SubmissionOutcome;
use crate::error::NotifyResult;

const HTTP_OK: u16 = 200;

/// Deployment notifier - submits a deploy form through a transport
pub struct DeploymentNotifier<T>
where
    T: DeployTransport,
{
    transport: T,
    sink: Arc<dyn NoticeSink>,
}

impl<T> DeploymentNotifier<T>
where
    T: DeployTransport,
{
    pub fn new(transport: T, sink: Arc<dyn NoticeSink>) -> Self {
        Self { transport, sink }
    }

    /// Submit the deployment and wait for the response body to finish.
    pub async fn submit(&self, request: &DeploymentRequest) -> NotifyResult<SubmissionOutcome> {
        debug!(
            endpoint = request.endpoint(),
            environment = request.environment(),
            revision = request.revision(),
            "submitting deploy notification"
        );

        let response = self
            .transport
            .post_form(request.endpoint(), request.form_fields())
            .await
            .inspect_err(|e| debug!(error = %e, "deploy notification was not sent"))?;

        let status = response.status();
        let body = response.into_body();
        debug!(status, "deploy endpoint responded");

        if status == HTTP_OK {
            drain(body).await;
            if !request.silent() {
                self.sink.on_notice(DeployNotice::Acknowledged {
                    environment: request.environment().to_string(),
                    revision: request.revision().to_string(),
                });
            }
            return Ok(SubmissionOutcome::Acknowledged);
        }

        let bytes = read_to_end(body).await;
        let text = String::from_utf8_lossy(&bytes).into_owned();

        self.sink.on_notice(DeployNotice::NotAcknowledged {
            status,
            body: text.clone(),
        });

        Ok(SubmissionOutcome::NotAcknowledged { status, body: text })
    }
}

/// Read and discard until end of stream.
async fn drain(mut body: Box<dyn ResponseBody>) {
    let mut discarded = 0usize;
    loop {
        match body.next_chunk().await {
            Ok(Some(chunk)) => discarded += chunk.len(),
            Ok(None) => break,
            Err(e) => {
                debug!(error = %e, "response body ended early");
                break;
            }
        }
    }
    debug!(bytes = discarded, "drained response body");
}

/// Concatenate every chunk. A read error keeps what arrived before it.
async fn read_to_end(mut body: Box<dyn ResponseBody>) -> Vec<u8> {
    let mut buf = Vec::new();
    loop {
        match body.next_chunk().await {
            Ok(Some(chunk)) => buf.extend_from_slice(&chunk),
            Ok(None) => break,
            Err(e) => {
                debug!(error = %e, read = buf.len(), "response body ended early");
                break;
            }
        }
    }
    buf
}
