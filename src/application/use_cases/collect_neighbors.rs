use crate::application::dto::{ReportRequest, ReportResponse};
use crate::lldp::domain::{
    parse_config_response, parse_show_response, ConfigTableSchema, Credentials,
    NeighborDescriptor, ReportMetadata, SwitchReport, SwitchTarget,
};
use crate::lldp::services::{correlate, parse_config_table};
use crate::ports::outbound::{DeviceClient, ProgressReporter};
use crate::shared::error::FetchError;
use crate::shared::Result;

/// The command issued twice per switch: once through the structured
/// show endpoint, once through the config endpoint for the text table.
const SHOW_LLDP_NEIGHBORS: &str = "show lldp neighbors";

/// CollectNeighborsUseCase - Core use case for neighbor collection
///
/// Visits every inventory switch in order, fetches the two LLDP views
/// through the injected device client, and correlates them into one
/// report per switch. Switches are queried strictly sequentially; a
/// failing switch is recorded in its report and the run continues.
///
/// # Type Parameters
/// * `DC` - DeviceClient implementation
/// * `PR` - ProgressReporter implementation
pub struct CollectNeighborsUseCase<DC, PR> {
    device_client: DC,
    progress_reporter: PR,
}

impl<DC, PR> CollectNeighborsUseCase<DC, PR>
where
    DC: DeviceClient,
    PR: ProgressReporter,
{
    /// Creates a new CollectNeighborsUseCase with injected dependencies
    pub fn new(device_client: DC, progress_reporter: PR) -> Self {
        Self {
            device_client,
            progress_reporter,
        }
    }

    /// Executes the collection run
    ///
    /// # Arguments
    /// * `request` - The validated inventory and table schema
    ///
    /// # Returns
    /// ReportResponse with one report per switch, in inventory order
    pub async fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        let inventory = &request.inventory;
        let total = inventory.switches.len();

        self.progress_reporter
            .report(&format!("🔌 Querying {} switch(es) for LLDP neighbors", total));

        let mut switch_reports = Vec::with_capacity(total);
        for (index, target) in inventory.switches.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(target.name.as_str()));

            let outcome = self
                .collect_switch(
                    target,
                    &inventory.credentials,
                    &request.schema,
                    &inventory.domain_suffix,
                )
                .await;

            if let Err(error) = &outcome {
                self.progress_reporter
                    .report_error(&format!("⚠️  {}: {}", target.name, error));
            }

            switch_reports.push(SwitchReport {
                name: target.name.clone(),
                address: target.address.clone(),
                outcome,
            });
        }

        let failed = switch_reports.iter().filter(|r| r.is_failed()).count();
        self.progress_reporter.report_completion(&format!(
            "✅ Collected neighbors from {}/{} switch(es)",
            total - failed,
            total
        ));

        Ok(ReportResponse::new(switch_reports, ReportMetadata::generate()))
    }

    /// Fetches and correlates both LLDP views for one switch.
    ///
    /// The structured response supplies the neighbor count and rows;
    /// the count bounds both the rows considered and the config-table
    /// lines parsed. Any fetch or envelope fault maps to this switch's
    /// FetchError without touching the rest of the run.
    async fn collect_switch(
        &self,
        target: &SwitchTarget,
        credentials: &Credentials,
        schema: &ConfigTableSchema,
        domain_suffix: &str,
    ) -> std::result::Result<Vec<NeighborDescriptor>, FetchError> {
        let show_raw = self
            .device_client
            .show(target, credentials, SHOW_LLDP_NEIGHBORS)
            .await?;
        let (count, mut rows) =
            parse_show_response(&show_raw).map_err(|e| FetchError::Envelope {
                address: target.address.clone(),
                details: e.to_string(),
            })?;
        rows.truncate(count);

        let config_raw = self
            .device_client
            .config(target, credentials, SHOW_LLDP_NEIGHBORS)
            .await?;
        let config_body =
            parse_config_response(&config_raw).map_err(|e| FetchError::Envelope {
                address: target.address.clone(),
                details: e.to_string(),
            })?;

        let config_rows = parse_config_table(&config_body, count, schema);
        Ok(correlate(&rows, &config_rows, schema, domain_suffix))
    }
}
