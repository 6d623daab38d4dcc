//! Report read model for formatting
//!
//! Denormalized view of the collection response, consumed by the
//! output formatters.

use crate::application::dto::ReportResponse;

/// Query-optimized view of one collection run.
#[derive(Debug, Clone)]
pub struct ReportReadModel {
    pub metadata: MetadataView,
    /// One entry per inventory switch, in inventory order.
    pub switches: Vec<SwitchView>,
}

#[derive(Debug, Clone)]
pub struct MetadataView {
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
}

#[derive(Debug, Clone)]
pub struct SwitchView {
    pub name: String,
    pub address: String,
    pub neighbors: Vec<DescriptorView>,
    /// Rendered failure message when the switch could not be queried.
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DescriptorView {
    pub local_interface: String,
    pub neighbor: String,
    pub neighbor_interface: Option<String>,
}

/// Builds the read model from a collection response.
pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    pub fn build(response: &ReportResponse) -> ReportReadModel {
        let switches = response
            .switch_reports
            .iter()
            .map(|report| SwitchView {
                name: report.name.clone(),
                address: report.address.clone(),
                neighbors: report
                    .neighbors()
                    .unwrap_or_default()
                    .iter()
                    .map(|descriptor| DescriptorView {
                        local_interface: descriptor.local_interface.clone(),
                        neighbor: descriptor.neighbor.clone(),
                        neighbor_interface: descriptor.neighbor_interface.clone(),
                    })
                    .collect(),
                error: report.error().map(|e| e.to_string()),
            })
            .collect();

        ReportReadModel {
            metadata: MetadataView {
                generated_at: response.metadata.generated_at.clone(),
                tool_name: response.metadata.tool_name.clone(),
                tool_version: response.metadata.tool_version.clone(),
                report_id: response.metadata.report_id.clone(),
            },
            switches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lldp::domain::{
        InterfaceMatch, NeighborDescriptor, NeighborRow, ReportMetadata, SwitchReport,
    };
    use crate::shared::error::FetchError;

    #[test]
    fn test_build_maps_success_and_failure() {
        let descriptor = NeighborDescriptor::from_row(&NeighborRow {
            chassis_id: "nx1".to_string(),
            port_id: "Eth1/1".to_string(),
        })
        .resolve(
            InterfaceMatch::Found {
                remote_interface: "Eth2/1".to_string(),
            },
            ".ntc.com",
        );

        let response = ReportResponse::new(
            vec![
                SwitchReport::succeeded("sw1", "10.0.0.1", vec![descriptor]),
                SwitchReport::failed(
                    "sw2",
                    "10.0.0.2",
                    FetchError::Api {
                        address: "10.0.0.2".to_string(),
                        status: 401,
                    },
                ),
            ],
            ReportMetadata::generate(),
        );

        let model = ReportReadModelBuilder::build(&response);

        assert_eq!(model.switches.len(), 2);
        assert_eq!(model.switches[0].name, "sw1");
        assert_eq!(model.switches[0].neighbors.len(), 1);
        assert_eq!(model.switches[0].neighbors[0].neighbor, "nx1.ntc.com");
        assert!(model.switches[0].error.is_none());

        assert!(model.switches[1].neighbors.is_empty());
        let error = model.switches[1].error.as_deref().unwrap();
        assert!(error.contains("HTTP 401"));
        assert_eq!(model.metadata.tool_name, "nx-lldp");
    }
}
