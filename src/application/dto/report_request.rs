use crate::lldp::domain::{ConfigTableSchema, Inventory};

/// ReportRequest - Internal request DTO for the neighbor collection
/// use case
///
/// Carries the validated inventory and the table schema to parse the
/// config-style output with. The schema defaults to the NX-OS layout
/// but stays on the request so the positional contract is chosen by
/// the caller, not buried in the parser.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub inventory: Inventory,
    pub schema: ConfigTableSchema,
}

impl ReportRequest {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            schema: ConfigTableSchema::nxos(),
        }
    }

    pub fn with_schema(inventory: Inventory, schema: ConfigTableSchema) -> Self {
        Self { inventory, schema }
    }
}
