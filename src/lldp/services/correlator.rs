use crate::lldp::domain::{
    ConfigTableSchema, InterfaceMatch, NeighborDescriptor, NeighborRow,
};

/// Scans every config-table row for one whose local-interface and
/// device-name columns equal the given pair. Comparison is exact
/// string equality with no normalization.
///
/// The scan never short-circuits: when several rows match the same
/// pair, the last one in iteration order wins. A row long enough to
/// match but too short to carry the remote-interface column counts as
/// no match.
pub fn match_remote_interface(
    local_interface: &str,
    neighbor: &str,
    config_rows: &[Vec<String>],
    schema: &ConfigTableSchema,
) -> InterfaceMatch {
    let mut result = InterfaceMatch::NotFound;
    for row in config_rows {
        let device = row.get(schema.device_column).map(String::as_str);
        let local = row.get(schema.local_interface_column).map(String::as_str);
        if device == Some(neighbor) && local == Some(local_interface) {
            if let Some(remote) = row.get(schema.remote_interface_column) {
                result = InterfaceMatch::Found {
                    remote_interface: remote.clone(),
                };
            }
        }
    }
    result
}

/// Builds one descriptor per structured neighbor row, joined against
/// the parsed config-table rows.
///
/// A matched descriptor carries the remote interface and the neighbor
/// name with `domain_suffix` appended once; an unmatched descriptor
/// keeps the bare name and no remote interface.
pub fn correlate(
    rows: &[NeighborRow],
    config_rows: &[Vec<String>],
    schema: &ConfigTableSchema,
    domain_suffix: &str,
) -> Vec<NeighborDescriptor> {
    rows.iter()
        .map(|row| {
            let descriptor = NeighborDescriptor::from_row(row);
            let interface_match = match_remote_interface(
                &descriptor.local_interface,
                &descriptor.neighbor,
                config_rows,
                schema,
            );
            descriptor.resolve(interface_match, domain_suffix)
        })
        .collect()
}
