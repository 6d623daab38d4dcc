use async_trait::async_trait;
use nx_lldp::prelude::*;
use serde_json::json;
use std::collections::{HashMap, HashSet};

/// Builds a raw NX-API `cli_show` response for `show lldp neighbors`
/// with the given neighbor count and (chassis_id, port_id) rows.
pub fn show_response(count: usize, rows: &[(&str, &str)]) -> String {
    let row_values: Vec<serde_json::Value> = rows
        .iter()
        .map(|(chassis_id, port_id)| json!({"chassis_id": chassis_id, "port_id": port_id}))
        .collect();
    json!({
        "ins_api": {
            "type": "cli_show",
            "version": "1.0",
            "sid": "eoc",
            "outputs": {
                "output": {
                    "input": "show lldp neighbors",
                    "msg": "Success",
                    "code": "200",
                    "body": {
                        "neigh_count": count,
                        "TABLE_nbor": {"ROW_nbor": row_values}
                    }
                }
            }
        }
    })
    .to_string()
}

/// Builds a raw NX-API `cli_conf` response whose body is the standard
/// 4-line header followed by one table line per (device, remote_if,
/// local_if) triple.
pub fn config_response(rows: &[(&str, &str, &str)]) -> String {
    let mut body = String::from(
        "Capability codes:\n\
         (R) Router, (B) Bridge, (T) Telephone\n\
         (W) WLAN AP, (P) Repeater, (S) Station\n\
         Device ID            Port ID         Hold-time  Capability  Local Intf\n",
    );
    for (device, remote_interface, local_interface) in rows {
        body.push_str(&format!(
            "{:<20} {:<15} 120        BR          {}\n",
            device, remote_interface, local_interface
        ));
    }
    json!({
        "ins_api": {
            "type": "cli_conf",
            "version": "1.0",
            "sid": "eoc",
            "outputs": {
                "output": {
                    "input": "show lldp neighbors",
                    "msg": "Success",
                    "code": "200",
                    "body": body
                }
            }
        }
    })
    .to_string()
}

/// Mock DeviceClient serving canned responses per switch address
pub struct MockDeviceClient {
    responses: HashMap<String, (String, String)>,
    failing_addresses: HashSet<String>,
}

impl MockDeviceClient {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            failing_addresses: HashSet::new(),
        }
    }

    /// Registers the (show, config) response pair for one address.
    pub fn with_switch(mut self, address: &str, show_raw: String, config_raw: String) -> Self {
        self.responses
            .insert(address.to_string(), (show_raw, config_raw));
        self
    }

    /// Makes every request to the address fail with a transport error.
    pub fn with_unreachable(mut self, address: &str) -> Self {
        self.failing_addresses.insert(address.to_string());
        self
    }

    fn lookup(&self, address: &str) -> std::result::Result<&(String, String), FetchError> {
        if self.failing_addresses.contains(address) {
            return Err(FetchError::Transport {
                address: address.to_string(),
                details: "connection refused".to_string(),
            });
        }
        self.responses
            .get(address)
            .ok_or_else(|| FetchError::Transport {
                address: address.to_string(),
                details: "no mock response registered".to_string(),
            })
    }
}

impl Default for MockDeviceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeviceClient for MockDeviceClient {
    async fn show(
        &self,
        target: &SwitchTarget,
        _credentials: &Credentials,
        _command: &str,
    ) -> std::result::Result<String, FetchError> {
        self.lookup(&target.address).map(|(show, _)| show.clone())
    }

    async fn config(
        &self,
        target: &SwitchTarget,
        _credentials: &Credentials,
        _command: &str,
    ) -> std::result::Result<String, FetchError> {
        self.lookup(&target.address)
            .map(|(_, config)| config.clone())
    }
}
