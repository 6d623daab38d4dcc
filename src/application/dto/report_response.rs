use std::collections::BTreeMap;

use crate::lldp::domain::{NeighborDescriptor, ReportMetadata, SwitchReport};

/// ReportResponse - Internal response DTO from the neighbor collection
/// use case
///
/// Holds one report per inventory switch, in inventory order, plus the
/// run metadata. Adapters format this into the output representation.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub switch_reports: Vec<SwitchReport>,
    pub metadata: ReportMetadata,
}

impl ReportResponse {
    pub fn new(switch_reports: Vec<SwitchReport>, metadata: ReportMetadata) -> Self {
        Self {
            switch_reports,
            metadata,
        }
    }

    /// The result mapping: switch display name to neighbor list, for
    /// every switch that was queried successfully. Failed switches are
    /// absent here and surface through [`Self::failure_count`] and the
    /// per-report errors instead.
    pub fn neighbor_mapping(&self) -> BTreeMap<String, Vec<NeighborDescriptor>> {
        self.switch_reports
            .iter()
            .filter_map(|report| {
                report
                    .neighbors()
                    .map(|neighbors| (report.name.clone(), neighbors.to_vec()))
            })
            .collect()
    }

    pub fn failure_count(&self) -> usize {
        self.switch_reports
            .iter()
            .filter(|report| report.is_failed())
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::FetchError;

    #[test]
    fn test_neighbor_mapping_skips_failures() {
        let response = ReportResponse::new(
            vec![
                SwitchReport::succeeded("sw1", "10.0.0.1", vec![]),
                SwitchReport::failed(
                    "sw2",
                    "10.0.0.2",
                    FetchError::Transport {
                        address: "10.0.0.2".to_string(),
                        details: "timed out".to_string(),
                    },
                ),
            ],
            ReportMetadata::generate(),
        );

        let mapping = response.neighbor_mapping();
        assert_eq!(mapping.len(), 1);
        assert!(mapping.contains_key("sw1"));
        assert_eq!(response.failure_count(), 1);
        assert!(response.has_failures());
    }
}
