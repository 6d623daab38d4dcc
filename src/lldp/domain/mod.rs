pub mod envelope;
pub mod neighbor;
pub mod report;
pub mod schema;
pub mod switch;

pub use envelope::{parse_config_response, parse_show_response};
pub use neighbor::{InterfaceMatch, NeighborDescriptor, NeighborRow};
pub use report::{ReportMetadata, SwitchReport};
pub use schema::ConfigTableSchema;
pub use switch::{Credentials, Inventory, SwitchTarget, DEFAULT_DOMAIN_SUFFIX};
