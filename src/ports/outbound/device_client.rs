use async_trait::async_trait;

use crate::lldp::domain::{Credentials, SwitchTarget};
use crate::shared::error::FetchError;

/// DeviceClient port for issuing commands against one switch.
///
/// This port is the seam around the device-automation transport
/// (NX-API over HTTP in production, in-memory fixtures in tests). Both
/// methods return the raw JSON response text; envelope unwrapping is
/// the caller's concern so the same parsing path runs against real
/// devices and test fixtures.
///
/// Errors are the per-switch [`FetchError`] taxonomy rather than an
/// opaque error type, so the aggregator can fold a failure into that
/// switch's report without losing the address or the failure kind.
#[async_trait]
pub trait DeviceClient: Send + Sync {
    /// Issues a structured-output command (NX-API `cli_show`).
    ///
    /// # Arguments
    /// * `target` - The switch to query
    /// * `credentials` - Credential pair for the switch
    /// * `command` - CLI command string, e.g. `show lldp neighbors`
    ///
    /// # Returns
    /// The raw JSON response text.
    async fn show(
        &self,
        target: &SwitchTarget,
        credentials: &Credentials,
        command: &str,
    ) -> Result<String, FetchError>;

    /// Issues the same command through the config endpoint (NX-API
    /// `cli_conf`), whose response body carries the command output as
    /// a raw text blob.
    async fn config(
        &self,
        target: &SwitchTarget,
        credentials: &Credentials,
        command: &str,
    ) -> Result<String, FetchError>;
}
