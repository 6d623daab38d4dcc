//! nx-lldp - LLDP neighbor reporting for Cisco Nexus switches
//!
//! This library queries switches for LLDP neighbor information over
//! NX-API, correlates the structured neighbor table with the
//! config-style text dump, and produces a per-switch neighbor report.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`lldp`): switch targets, neighbor records, the
//!   NX-API envelope shapes and the parse/correlate services
//! - **Application Layer** (`application`): the collection use case,
//!   DTOs and the report read model
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use nx_lldp::prelude::*;
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let inventory = load_inventory_from_path(Path::new("nx-lldp.inventory.yml"))?;
//!
//! let use_case = CollectNeighborsUseCase::new(
//!     NxApiClient::new()?,
//!     StderrProgressReporter::new(),
//! );
//! let response = use_case.execute(ReportRequest::new(inventory)).await?;
//!
//! for (switch, neighbors) in response.neighbor_mapping() {
//!     println!("{}: {} neighbor(s)", switch, neighbors.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod lldp;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
    pub use crate::adapters::outbound::network::NxApiClient;
    pub use crate::application::dto::{ReportRequest, ReportResponse};
    pub use crate::application::read_models::{ReportReadModel, ReportReadModelBuilder};
    pub use crate::application::use_cases::CollectNeighborsUseCase;
    pub use crate::config::{discover_inventory, load_inventory_from_path, resolve_inventory};
    pub use crate::lldp::domain::{
        ConfigTableSchema, Credentials, InterfaceMatch, Inventory, NeighborDescriptor,
        NeighborRow, SwitchReport, SwitchTarget, DEFAULT_DOMAIN_SUFFIX,
    };
    pub use crate::lldp::services::{correlate, match_remote_interface, parse_config_table};
    pub use crate::ports::outbound::{
        DeviceClient, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{ExitCode, FetchError, NxLldpError};
    pub use crate::shared::Result;
}
