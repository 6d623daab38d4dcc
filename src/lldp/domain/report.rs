use chrono::Utc;
use uuid::Uuid;

use crate::lldp::domain::NeighborDescriptor;
use crate::shared::error::FetchError;

/// Outcome of querying one switch: either its neighbor list or the
/// failure that stopped it. A failed switch never aborts the run.
#[derive(Debug, Clone)]
pub struct SwitchReport {
    pub name: String,
    pub address: String,
    pub outcome: Result<Vec<NeighborDescriptor>, FetchError>,
}

impl SwitchReport {
    pub fn succeeded(
        name: impl Into<String>,
        address: impl Into<String>,
        neighbors: Vec<NeighborDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            outcome: Ok(neighbors),
        }
    }

    pub fn failed(name: impl Into<String>, address: impl Into<String>, error: FetchError) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            outcome: Err(error),
        }
    }

    pub fn neighbors(&self) -> Option<&[NeighborDescriptor]> {
        self.outcome.as_ref().ok().map(Vec::as_slice)
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.outcome.as_ref().err()
    }

    pub fn is_failed(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Report metadata: generation timestamp, tool identity and a unique
/// report id, stamped once per run.
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
}

impl ReportMetadata {
    pub fn generate() -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            tool_name: "nx-lldp".to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            report_id: format!("urn:uuid:{}", Uuid::new_v4()),
        }
    }
}
