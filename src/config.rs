//! Inventory file support for nx-lldp.
//!
//! Provides YAML-based inventory through `nx-lldp.inventory.yml`
//! files: the switch addresses and display names as parallel lists,
//! the shared credential pair, and an optional domain suffix.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::lldp::domain::{Credentials, Inventory, SwitchTarget};
use crate::shared::error::NxLldpError;
use crate::shared::Result;

const INVENTORY_FILENAME: &str = "nx-lldp.inventory.yml";

/// Top-level inventory file schema.
///
/// ```yaml
/// addresses:
///   - 85.190.177.249
///   - 153.92.37.42
/// names:
///   - nxos-spine1
///   - nxos-spine2
/// username: admin
/// password: secret
/// domain_suffix: .ntc.com
/// ```
#[derive(Debug, Deserialize, Default)]
pub struct InventoryFile {
    pub addresses: Option<Vec<String>>,
    pub names: Option<Vec<String>>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub domain_suffix: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load the inventory from an explicit path. Returns an error if the
/// file is not found.
pub fn load_inventory_from_path(path: &Path) -> Result<Inventory> {
    if !path.exists() {
        return Err(NxLldpError::InventoryNotFound {
            path: path.to_path_buf(),
            suggestion: "Check the path passed with --inventory.".to_string(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path).map_err(|e| NxLldpError::InventoryParseError {
        path: path.to_path_buf(),
        details: format!("Failed to read file: {}", e),
    })?;

    let file: InventoryFile =
        serde_yaml_ng::from_str(&content).map_err(|e| NxLldpError::InventoryParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    warn_unknown_fields(&file);
    build_inventory(file)
}

/// Auto-discover the inventory in a directory. Returns `None` silently
/// if the file is not there.
pub fn discover_inventory(dir: &Path) -> Result<Option<Inventory>> {
    let inventory_path = dir.join(INVENTORY_FILENAME);

    if !inventory_path.exists() {
        return Ok(None);
    }

    let inventory = load_inventory_from_path(&inventory_path)?;
    Ok(Some(inventory))
}

/// Resolve the inventory: an explicit path wins, otherwise the file is
/// discovered in the current directory.
pub fn resolve_inventory(explicit_path: Option<&Path>) -> Result<Inventory> {
    match explicit_path {
        Some(path) => load_inventory_from_path(path),
        None => discover_inventory(Path::new("."))?.ok_or_else(|| {
            NxLldpError::InventoryNotFound {
                path: Path::new(INVENTORY_FILENAME).to_path_buf(),
                suggestion: format!(
                    "Create {} in the current directory or pass one with --inventory.",
                    INVENTORY_FILENAME
                ),
            }
            .into()
        }),
    }
}

/// Validate the parsed file and convert the parallel address/name
/// lists into switch targets.
fn build_inventory(file: InventoryFile) -> Result<Inventory> {
    let addresses = file.addresses.unwrap_or_default();
    let names = file.names.unwrap_or_default();

    if addresses.is_empty() {
        return Err(NxLldpError::InvalidInventory {
            reason: "no switch addresses configured".to_string(),
            hint: "List at least one switch under 'addresses'.".to_string(),
        }
        .into());
    }

    if addresses.len() != names.len() {
        return Err(NxLldpError::InvalidInventory {
            reason: format!(
                "{} address(es) but {} name(s)",
                addresses.len(),
                names.len()
            ),
            hint: "'addresses' and 'names' are parallel lists and must have the same length."
                .to_string(),
        }
        .into());
    }

    let username = require_credential(file.username, "username")?;
    let password = require_credential(file.password, "password")?;

    let switches = addresses
        .into_iter()
        .zip(names)
        .map(|(address, name)| SwitchTarget::new(address, name))
        .collect();

    Ok(Inventory::new(
        switches,
        Credentials::new(username, password),
        file.domain_suffix,
    ))
}

fn require_credential(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(NxLldpError::InvalidInventory {
            reason: format!("missing '{}'", field),
            hint: format!("Set a non-empty '{}' field in the inventory file.", field),
        }
        .into()),
    }
}

/// Warn about unknown fields in the inventory file.
fn warn_unknown_fields(file: &InventoryFile) {
    for key in file.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown inventory field '{}' will be ignored.", key);
    }
}
