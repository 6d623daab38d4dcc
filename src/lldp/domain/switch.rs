use std::fmt;

/// Domain suffix appended to matched neighbor names when the inventory
/// does not configure one.
pub const DEFAULT_DOMAIN_SUFFIX: &str = ".ntc.com";

/// A single switch to query: management address plus display name.
///
/// Targets are fixed at process start and never mutated; the display
/// name keys the final report mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchTarget {
    pub address: String,
    pub name: String,
}

impl SwitchTarget {
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
        }
    }
}

/// Credential pair shared by every switch in the inventory.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Password must never leak into logs or error chains.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// The fully validated inventory handed to the collector: the switches
/// to visit in order, the shared credential pair, and the domain suffix
/// appended to matched neighbor names.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub switches: Vec<SwitchTarget>,
    pub credentials: Credentials,
    pub domain_suffix: String,
}

impl Inventory {
    pub fn new(
        switches: Vec<SwitchTarget>,
        credentials: Credentials,
        domain_suffix: Option<String>,
    ) -> Self {
        Self {
            switches,
            credentials,
            domain_suffix: domain_suffix.unwrap_or_else(|| DEFAULT_DOMAIN_SUFFIX.to_string()),
        }
    }
}
