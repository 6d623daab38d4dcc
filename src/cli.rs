use clap::Parser;

use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
use crate::ports::outbound::ReportFormatter;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" | "text" => Ok(OutputFormat::Table),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'table'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Table => Box::new(TableFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(&self) -> &'static str {
        match self {
            OutputFormat::Json => "📝 Rendering JSON report...",
            OutputFormat::Table => "📝 Rendering plain-text report...",
        }
    }
}

/// Report LLDP neighbors for Cisco Nexus switches over NX-API
#[derive(Parser, Debug)]
#[command(name = "nx-lldp")]
#[command(version)]
#[command(about = "Report LLDP neighbors for Cisco Nexus switches over NX-API", long_about = None)]
pub struct Args {
    /// Output format: json or table
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Path to the inventory file (defaults to nx-lldp.inventory.yml
    /// in the current directory)
    #[arg(short, long)]
    pub inventory: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
