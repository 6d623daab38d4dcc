use serde::{Deserialize, Serialize};

/// One structured neighbor row from the NX-API `show lldp neighbors`
/// table. Vendor fields beyond the two we correlate on are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NeighborRow {
    /// The neighbor device's advertised identity.
    pub chassis_id: String,
    /// The local interface the neighbor was observed on.
    pub port_id: String,
}

/// Result of scanning the config-table rows for a neighbor's remote
/// interface.
///
/// A miss is an expected outcome of the scan, not an error; it leaves
/// the descriptor without a remote interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceMatch {
    Found { remote_interface: String },
    NotFound,
}

/// One entry of the final per-switch report: a local interface, the
/// neighbor seen on it, and - when the config table yielded a match -
/// the neighbor's own interface.
///
/// `neighbor_interface` is omitted entirely from serialized output
/// when no match occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborDescriptor {
    pub local_interface: String,
    pub neighbor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighbor_interface: Option<String>,
}

impl NeighborDescriptor {
    /// Builds the descriptor for a structured row before correlation:
    /// bare neighbor name, no remote interface.
    pub fn from_row(row: &NeighborRow) -> Self {
        Self {
            local_interface: row.port_id.clone(),
            neighbor: row.chassis_id.clone(),
            neighbor_interface: None,
        }
    }

    /// Applies a correlation result. On a match the remote interface is
    /// recorded and the domain suffix is appended to the neighbor name
    /// exactly once; a miss leaves the descriptor untouched.
    pub fn resolve(mut self, interface_match: InterfaceMatch, domain_suffix: &str) -> Self {
        if let InterfaceMatch::Found { remote_interface } = interface_match {
            self.neighbor_interface = Some(remote_interface);
            self.neighbor.push_str(domain_suffix);
        }
        self
    }

    /// True when the config-table scan produced a remote interface.
    pub fn is_fully_populated(&self) -> bool {
        self.neighbor_interface.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(chassis_id: &str, port_id: &str) -> NeighborRow {
        NeighborRow {
            chassis_id: chassis_id.to_string(),
            port_id: port_id.to_string(),
        }
    }

    #[test]
    fn test_from_row() {
        let descriptor = NeighborDescriptor::from_row(&row("nx1", "Eth1/1"));
        assert_eq!(descriptor.local_interface, "Eth1/1");
        assert_eq!(descriptor.neighbor, "nx1");
        assert!(descriptor.neighbor_interface.is_none());
        assert!(!descriptor.is_fully_populated());
    }

    #[test]
    fn test_resolve_found_sets_interface_and_suffix() {
        let descriptor = NeighborDescriptor::from_row(&row("nx1", "Eth1/1")).resolve(
            InterfaceMatch::Found {
                remote_interface: "Eth2/1".to_string(),
            },
            ".ntc.com",
        );
        assert_eq!(descriptor.neighbor, "nx1.ntc.com");
        assert_eq!(descriptor.neighbor_interface.as_deref(), Some("Eth2/1"));
        assert!(descriptor.is_fully_populated());
    }

    #[test]
    fn test_resolve_not_found_leaves_descriptor_unchanged() {
        let descriptor = NeighborDescriptor::from_row(&row("nx1", "Eth1/1"))
            .resolve(InterfaceMatch::NotFound, ".ntc.com");
        assert_eq!(descriptor.neighbor, "nx1");
        assert!(descriptor.neighbor_interface.is_none());
    }

    #[test]
    fn test_serialization_omits_missing_interface() {
        let unmatched = NeighborDescriptor::from_row(&row("nx1", "Eth1/1"));
        let json = serde_json::to_value(&unmatched).unwrap();
        assert!(json.get("neighbor_interface").is_none());

        let matched = unmatched.resolve(
            InterfaceMatch::Found {
                remote_interface: "Eth2/1".to_string(),
            },
            ".ntc.com",
        );
        let json = serde_json::to_value(&matched).unwrap();
        assert_eq!(json["neighbor_interface"], "Eth2/1");
    }

    #[test]
    fn test_neighbor_row_deserialize_ignores_extra_fields() {
        let raw = r#"{
            "chassis_id": "nxos-leaf1",
            "port_id": "Eth1/1",
            "l_port_id": "mgmt0",
            "hold_time": "120",
            "capability": "BR"
        }"#;
        let row: NeighborRow = serde_json::from_str(raw).unwrap();
        assert_eq!(row.chassis_id, "nxos-leaf1");
        assert_eq!(row.port_id, "Eth1/1");
    }
}
