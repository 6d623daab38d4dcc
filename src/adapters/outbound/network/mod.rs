pub mod nxapi_client;

pub use nxapi_client::NxApiClient;
