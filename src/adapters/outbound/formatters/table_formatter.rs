use crate::application::read_models::{ReportReadModel, SwitchView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Column header for the per-switch neighbor table
const TABLE_HEADER: &str = "  LOCAL INTERFACE     NEIGHBOR                       NEIGHBOR INTERFACE\n";

/// Separator line under the column header
const TABLE_SEPARATOR: &str = "  -----------------   ----------------------------   ------------------\n";

/// Placeholder for descriptors with no matched remote interface
const NO_INTERFACE: &str = "-";

/// TableFormatter adapter for rendering the report as a plain-text
/// table, one section per switch
///
/// This adapter implements the ReportFormatter port for human-readable
/// terminal output.
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_switch(&self, output: &mut String, switch: &SwitchView) {
        output.push_str(&format!("{} ({})\n", switch.name, switch.address));

        if let Some(error) = &switch.error {
            output.push_str(&format!("  error: {}\n\n", error));
            return;
        }

        if switch.neighbors.is_empty() {
            output.push_str("  no neighbors\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for descriptor in &switch.neighbors {
            output.push_str(&format!(
                "  {:<19} {:<30} {}\n",
                descriptor.local_interface,
                descriptor.neighbor,
                descriptor.neighbor_interface.as_deref().unwrap_or(NO_INTERFACE)
            ));
        }
        output.push('\n');
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TableFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "LLDP neighbor report ({} {}, generated {})\n\n",
            model.metadata.tool_name, model.metadata.tool_version, model.metadata.generated_at
        ));

        for switch in &model.switches {
            self.render_switch(&mut output, switch);
        }

        let failed = model.switches.iter().filter(|s| s.error.is_some()).count();
        output.push_str(&format!(
            "{}/{} switch(es) reported\n",
            model.switches.len() - failed,
            model.switches.len()
        ));

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{DescriptorView, MetadataView};

    fn metadata() -> MetadataView {
        MetadataView {
            generated_at: "2026-08-06T12:00:00+00:00".to_string(),
            tool_name: "nx-lldp".to_string(),
            tool_version: "0.4.1".to_string(),
            report_id: "urn:uuid:00000000-0000-0000-0000-000000000000".to_string(),
        }
    }

    #[test]
    fn test_format_renders_sections_and_placeholder() {
        let model = ReportReadModel {
            metadata: metadata(),
            switches: vec![SwitchView {
                name: "nxos-spine1".to_string(),
                address: "10.0.0.1".to_string(),
                neighbors: vec![
                    DescriptorView {
                        local_interface: "Eth1/1".to_string(),
                        neighbor: "nx1.ntc.com".to_string(),
                        neighbor_interface: Some("Eth2/1".to_string()),
                    },
                    DescriptorView {
                        local_interface: "Eth1/2".to_string(),
                        neighbor: "nx2".to_string(),
                        neighbor_interface: None,
                    },
                ],
                error: None,
            }],
        };

        let rendered = TableFormatter::new().format(&model).unwrap();

        assert!(rendered.contains("nxos-spine1 (10.0.0.1)"));
        assert!(rendered.contains("LOCAL INTERFACE"));
        assert!(rendered.contains("nx1.ntc.com"));
        assert!(rendered.contains("Eth2/1"));
        // Unmatched neighbors render the placeholder, not an empty cell.
        let unmatched_line = rendered
            .lines()
            .find(|line| line.contains("nx2"))
            .unwrap();
        assert!(unmatched_line.trim_end().ends_with('-'));
        assert!(rendered.contains("1/1 switch(es) reported"));
    }

    #[test]
    fn test_format_renders_failures_and_empty_switches() {
        let model = ReportReadModel {
            metadata: metadata(),
            switches: vec![
                SwitchView {
                    name: "nxos-leaf1".to_string(),
                    address: "10.0.0.3".to_string(),
                    neighbors: vec![],
                    error: Some("failed to reach 10.0.0.3: timed out".to_string()),
                },
                SwitchView {
                    name: "nxos-leaf2".to_string(),
                    address: "10.0.0.4".to_string(),
                    neighbors: vec![],
                    error: None,
                },
            ],
        };

        let rendered = TableFormatter::new().format(&model).unwrap();

        assert!(rendered.contains("error: failed to reach 10.0.0.3"));
        assert!(rendered.contains("no neighbors"));
        assert!(rendered.contains("1/2 switch(es) reported"));
    }
}
