/// Layout of the fixed-format text table returned by the config-style
/// `show lldp neighbors` call.
///
/// The table has a fixed number of header lines followed by one line
/// per neighbor; fields are addressed by whitespace-split column index.
/// Keeping the offsets in one named structure makes the positional
/// contract visible and testable instead of burying the literals in the
/// parser and the correlator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigTableSchema {
    /// Number of header lines to skip before the data rows.
    pub header_lines: usize,
    /// Column carrying the neighbor device name.
    pub device_column: usize,
    /// Column carrying the neighbor's own interface.
    pub remote_interface_column: usize,
    /// Column carrying the local interface the neighbor was seen on.
    pub local_interface_column: usize,
}

impl ConfigTableSchema {
    /// Layout of the NX-OS `show lldp neighbors` table:
    ///
    /// ```text
    /// Capability codes:
    ///   (R) Router, (B) Bridge, (T) Telephone, (C) DOCSIS Cable Device
    ///   (W) WLAN AP, (P) Repeater, (S) Station, (O) Other
    /// Device ID            Port ID         Hold-time  Capability  Local Intf
    /// nxos-leaf1           Eth2/1          120        BR          Eth1/1
    /// ```
    ///
    /// Column indices count whitespace-separated tokens, so on rows
    /// like the one above the device name is token 0, the neighbor's
    /// port token 1 and the local interface token 4.
    pub fn nxos() -> Self {
        Self {
            header_lines: 4,
            device_column: 0,
            remote_interface_column: 1,
            local_interface_column: 4,
        }
    }
}

impl Default for ConfigTableSchema {
    fn default() -> Self {
        Self::nxos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nxos_schema_offsets() {
        let schema = ConfigTableSchema::nxos();
        assert_eq!(schema.header_lines, 4);
        assert_eq!(schema.device_column, 0);
        assert_eq!(schema.remote_interface_column, 1);
        assert_eq!(schema.local_interface_column, 4);
    }

    #[test]
    fn test_default_is_nxos() {
        assert_eq!(ConfigTableSchema::default(), ConfigTableSchema::nxos());
    }
}
