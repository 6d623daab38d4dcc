/// Mock implementations for testing
mod mock_device_client;
mod mock_progress_reporter;

pub use mock_device_client::{config_response, show_response, MockDeviceClient};
pub use mock_progress_reporter::MockProgressReporter;
