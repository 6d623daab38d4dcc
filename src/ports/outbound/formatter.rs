use crate::application::read_models::ReportReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the neighbor report
///
/// This port abstracts the rendering logic for the different output
/// formats (JSON, plain-text table).
pub trait ReportFormatter {
    /// Renders the report read model into its final textual form
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, model: &ReportReadModel) -> Result<String>;
}
