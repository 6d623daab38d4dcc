/// ProgressReporter port for reporting progress during collection
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback while switches are being queried.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the switch list
    ///
    /// # Arguments
    /// * `current` - Switches visited so far
    /// * `total` - Total switches in the inventory
    /// * `message` - Optional message, typically the switch name
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
