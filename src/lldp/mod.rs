//! LLDP domain layer: switch targets, neighbor records, the NX-API
//! envelope shapes and the parse/correlate services that turn two raw
//! responses into one per-switch neighbor list.

pub mod domain;
pub mod services;
