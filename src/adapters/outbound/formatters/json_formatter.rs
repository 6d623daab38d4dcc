use std::collections::BTreeMap;

use crate::application::read_models::{DescriptorView, ReportReadModel};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport {
    metadata: JsonMetadata,
    /// Result mapping keyed by switch display name; failed switches
    /// are absent here and listed under `failures` instead.
    switches: BTreeMap<String, Vec<JsonDescriptor>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    failures: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
struct JsonMetadata {
    #[serde(rename = "generatedAt")]
    generated_at: String,
    tool: JsonTool,
    #[serde(rename = "reportId")]
    report_id: String,
}

#[derive(Debug, Serialize)]
struct JsonTool {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct JsonDescriptor {
    local_interface: String,
    neighbor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    neighbor_interface: Option<String>,
}

impl JsonDescriptor {
    fn from_view(view: &DescriptorView) -> Self {
        Self {
            local_interface: view.local_interface.clone(),
            neighbor: view.neighbor.clone(),
            neighbor_interface: view.neighbor_interface.clone(),
        }
    }
}

/// JsonFormatter adapter for rendering the report as JSON
///
/// This adapter implements the ReportFormatter port for JSON output.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut switches = BTreeMap::new();
        let mut failures = BTreeMap::new();

        for switch in &model.switches {
            match &switch.error {
                Some(error) => {
                    failures.insert(switch.name.clone(), error.clone());
                }
                None => {
                    switches.insert(
                        switch.name.clone(),
                        switch.neighbors.iter().map(JsonDescriptor::from_view).collect(),
                    );
                }
            }
        }

        let report = JsonReport {
            metadata: JsonMetadata {
                generated_at: model.metadata.generated_at.clone(),
                tool: JsonTool {
                    name: model.metadata.tool_name.clone(),
                    version: model.metadata.tool_version.clone(),
                },
                report_id: model.metadata.report_id.clone(),
            },
            switches,
            failures,
        };

        let mut rendered = serde_json::to_string_pretty(&report)?;
        rendered.push('\n');
        Ok(rendered)
    }
}
