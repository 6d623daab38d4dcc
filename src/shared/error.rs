use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow automation and CI systems to distinguish between
/// a fully successful run, a run where some switches could not be
/// queried, and hard failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every switch in the inventory was queried and reported
    Success = 0,
    /// One or more switches failed; the report covers the rest
    PartialFailure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (inventory error, output error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PartialFailure => write!(f, "Partial Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-level errors that abort the whole run.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
///
/// Per-switch query failures are deliberately NOT represented here;
/// those are [`FetchError`] values carried inside the per-switch
/// report so a single unreachable switch never aborts the run.
#[derive(Debug, Error)]
pub enum NxLldpError {
    #[error("Inventory file not found: {path}\n\n💡 Hint: {suggestion}")]
    InventoryNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse inventory file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid YAML with the fields addresses, names, username and password")]
    InventoryParseError { path: PathBuf, details: String },

    #[error("Invalid inventory: {reason}\n\n💡 Hint: {hint}")]
    InvalidInventory { reason: String, hint: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

/// Per-switch query failure.
///
/// Every variant names the switch address so a partial report can say
/// exactly which device failed and why, without aborting the run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("failed to reach {address}: {details}")]
    Transport { address: String, details: String },

    #[error("NX-API endpoint on {address} returned HTTP {status}")]
    Api { address: String, status: u16 },

    #[error("unexpected NX-API response from {address}: {details}")]
    Envelope { address: String, details: String },
}

impl FetchError {
    /// Address of the switch this failure belongs to.
    pub fn address(&self) -> &str {
        match self {
            FetchError::Transport { address, .. }
            | FetchError::Api { address, .. }
            | FetchError::Envelope { address, .. } => address,
        }
    }
}
