use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use site_logging::{site_debug, CONTACT_TARGET};
use tokio_util::sync::CancellationToken;

use crate::{ContactMessage, FailureKind, SubmissionId, SubmitError, SubmitReceipt};

#[derive(Debug, Clone)]
pub struct SubmitSettings {
    /// Form endpoint; `None` selects the simulated submitter.
    pub endpoint: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub simulated_delay: Duration,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            simulated_delay: Duration::from_millis(1500),
        }
    }
}

/// Capability that delivers a contact message somewhere.
#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(
        &self,
        submission_id: SubmissionId,
        message: &ContactMessage,
        cancel: &CancellationToken,
    ) -> Result<SubmitReceipt, SubmitError>;
}

pub fn build_submitter(settings: &SubmitSettings) -> Arc<dyn Submitter> {
    match settings.endpoint.as_deref() {
        Some(endpoint) => Arc::new(ReqwestSubmitter::new(endpoint, settings.clone())),
        None => Arc::new(SimulatedSubmitter::new(settings.simulated_delay)),
    }
}

/// POSTs the message as JSON; any 2xx status counts as delivered.
#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    endpoint: String,
    settings: SubmitSettings,
}

impl ReqwestSubmitter {
    pub fn new(endpoint: impl Into<String>, settings: SubmitSettings) -> Self {
        Self {
            endpoint: endpoint.into(),
            settings,
        }
    }

    fn build_client(&self) -> Result<reqwest::Client, SubmitError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| SubmitError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Submitter for ReqwestSubmitter {
    async fn submit(
        &self,
        submission_id: SubmissionId,
        message: &ContactMessage,
        cancel: &CancellationToken,
    ) -> Result<SubmitReceipt, SubmitError> {
        let url = reqwest::Url::parse(&self.endpoint)
            .map_err(|err| SubmitError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SubmitError::new(
                FailureKind::InvalidEndpoint,
                format!("unsupported scheme {}", url.scheme()),
            ));
        }
        let body = serde_json::to_vec(message)
            .map_err(|err| SubmitError::new(FailureKind::Rejected, err.to_string()))?;
        let client = self.build_client()?;

        site_debug!(
            target: CONTACT_TARGET,
            "posting submission {} to {} ({} bytes)",
            submission_id,
            url,
            body.len()
        );

        let request = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send();

        let response = tokio::select! {
            _ = cancel.cancelled() => {
                return Err(SubmitError::new(FailureKind::Cancelled, "submission cancelled"));
            }
            result = request => result.map_err(map_reqwest_error)?,
        };

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        Ok(SubmitReceipt {
            status: Some(status.as_u16()),
        })
    }
}

/// Stand-in for a real endpoint: waits a fixed delay, then resolves.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
    reject: bool,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            reject: false,
        }
    }

    /// A simulated endpoint that refuses every message after the delay.
    pub fn rejecting(delay: Duration) -> Self {
        Self {
            delay,
            reject: true,
        }
    }
}

#[async_trait::async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(
        &self,
        submission_id: SubmissionId,
        _message: &ContactMessage,
        cancel: &CancellationToken,
    ) -> Result<SubmitReceipt, SubmitError> {
        site_debug!(
            target: CONTACT_TARGET,
            "simulating submission {} ({} ms)",
            submission_id,
            self.delay.as_millis()
        );
        tokio::select! {
            _ = cancel.cancelled() => {
                Err(SubmitError::new(FailureKind::Cancelled, "submission cancelled"))
            }
            _ = tokio::time::sleep(self.delay) => {
                if self.reject {
                    Err(SubmitError::new(FailureKind::Rejected, "simulated rejection"))
                } else {
                    Ok(SubmitReceipt { status: None })
                }
            }
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::new(FailureKind::Timeout, err.to_string());
    }
    SubmitError::new(FailureKind::Network, err.to_string())
}
