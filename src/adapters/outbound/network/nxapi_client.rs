use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use crate::lldp::domain::{Credentials, SwitchTarget};
use crate::ports::outbound::DeviceClient;
use crate::shared::error::FetchError;
use crate::shared::Result;

const NXAPI_VERSION: &str = "1.0";
const CLI_SHOW: &str = "cli_show";
const CLI_CONF: &str = "cli_conf";

/// Request payload for the NX-API `ins` endpoint.
#[derive(Debug, Serialize)]
struct InsApiRequest<'a> {
    ins_api: InsApiPayload<'a>,
}

#[derive(Debug, Serialize)]
struct InsApiPayload<'a> {
    version: &'a str,
    #[serde(rename = "type")]
    message_type: &'a str,
    chunk: &'a str,
    sid: &'a str,
    input: &'a str,
    output_format: &'a str,
}

impl<'a> InsApiRequest<'a> {
    fn new(message_type: &'a str, command: &'a str) -> Self {
        Self {
            ins_api: InsApiPayload {
                version: NXAPI_VERSION,
                message_type,
                chunk: "0",
                sid: "1",
                input: command,
                output_format: "json",
            },
        }
    }
}

/// NxApiClient adapter for querying switches over NX-API
///
/// This adapter implements the DeviceClient port, posting `ins_api`
/// payloads to `http://{address}/ins` with HTTP basic auth. Commands
/// go out as `cli_show` for structured output and `cli_conf` for the
/// config-style text body.
///
/// Requests are retried a bounded number of times with a linear
/// backoff before the switch is reported as failed.
pub struct NxApiClient {
    client: reqwest::Client,
    max_retries: u32,
}

impl NxApiClient {
    /// Creates a new NX-API client with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("nx-lldp/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            max_retries: 3,
        })
    }

    /// Rejects addresses that would alter the request URL when
    /// interpolated into `http://{address}/ins`.
    fn validate_address(address: &str) -> std::result::Result<(), FetchError> {
        let unsafe_address = address.is_empty()
            || address
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '/' | '\\' | '#' | '?' | '@'));
        if unsafe_address {
            return Err(FetchError::Transport {
                address: address.to_string(),
                details: "address contains URL-unsafe characters".to_string(),
            });
        }
        Ok(())
    }

    fn endpoint(address: &str) -> String {
        format!("http://{}/ins", address)
    }

    /// Issues one command with retry logic (async)
    async fn execute_with_retry(
        &self,
        target: &SwitchTarget,
        credentials: &Credentials,
        command: &str,
        message_type: &str,
    ) -> std::result::Result<String, FetchError> {
        Self::validate_address(&target.address)?;

        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.execute(target, credentials, command, message_type).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        // Retry after a short wait (async)
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.expect("at least one attempt was made"))
    }

    /// Issues one command against the switch (async)
    async fn execute(
        &self,
        target: &SwitchTarget,
        credentials: &Credentials,
        command: &str,
        message_type: &str,
    ) -> std::result::Result<String, FetchError> {
        let url = Self::endpoint(&target.address);
        let payload = InsApiRequest::new(message_type, command);

        let response = self
            .client
            .post(&url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .json(&payload)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                address: target.address.clone(),
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Api {
                address: target.address.clone(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::Transport {
            address: target.address.clone(),
            details: e.to_string(),
        })
    }
}

// Note: no Default implementation; client construction can fail and
// callers must handle the Result from NxApiClient::new().

#[async_trait]
impl DeviceClient for NxApiClient {
    async fn show(
        &self,
        target: &SwitchTarget,
        credentials: &Credentials,
        command: &str,
    ) -> std::result::Result<String, FetchError> {
        self.execute_with_retry(target, credentials, command, CLI_SHOW)
            .await
    }

    async fn config(
        &self,
        target: &SwitchTarget,
        credentials: &Credentials,
        command: &str,
    ) -> std::result::Result<String, FetchError> {
        self.execute_with_retry(target, credentials, command, CLI_CONF)
            .await
    }
}
