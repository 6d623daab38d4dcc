use anyhow::Context;
use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::lldp::domain::NeighborRow;
use crate::shared::Result;

/// NX-API wraps every response in the same `ins_api` envelope; only
/// the body type differs between message types. `B` is the body shape:
/// a structured table for `cli_show`, a raw text blob for `cli_conf`.
#[derive(Debug, Deserialize)]
pub struct Envelope<B> {
    pub ins_api: InsApi<B>,
}

#[derive(Debug, Deserialize)]
pub struct InsApi<B> {
    pub outputs: Outputs<B>,
}

#[derive(Debug, Deserialize)]
pub struct Outputs<B> {
    pub output: Output<B>,
}

#[derive(Debug, Deserialize)]
pub struct Output<B> {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    pub body: B,
}

impl<B> Output<B> {
    /// NX-API reports per-command failures inside a 200 response; the
    /// embedded code must be checked before trusting the body.
    fn ensure_success(&self) -> Result<()> {
        if let Some(code) = &self.code {
            if code != "200" {
                anyhow::bail!(
                    "command failed with code {}: {}",
                    code,
                    self.msg.as_deref().unwrap_or("no message")
                );
            }
        }
        Ok(())
    }
}

/// Body of the structured `show lldp neighbors` response. The table is
/// omitted entirely when the switch has no neighbors.
#[derive(Debug, Deserialize)]
pub struct ShowLldpBody {
    #[serde(deserialize_with = "count_from_int_or_string")]
    pub neigh_count: usize,
    #[serde(rename = "TABLE_nbor", default)]
    pub table: Option<NeighborTable>,
}

#[derive(Debug, Deserialize)]
pub struct NeighborTable {
    #[serde(rename = "ROW_nbor")]
    pub rows: OneOrMany<NeighborRow>,
}

/// NX-API collapses single-row tables to a bare object instead of a
/// one-element array; both shapes must deserialize.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

/// NX-API encodes counters as JSON numbers on some releases and as
/// quoted strings on others.
fn count_from_int_or_string<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(usize),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<usize>()
            .map_err(|_| de::Error::custom(format!("invalid neighbor count: {:?}", s))),
    }
}

/// Unwraps the structured `cli_show` response down to the neighbor
/// count and row list.
pub fn parse_show_response(raw: &str) -> Result<(usize, Vec<NeighborRow>)> {
    let envelope: Envelope<ShowLldpBody> =
        serde_json::from_str(raw).context("malformed show response envelope")?;
    let output = envelope.ins_api.outputs.output;
    output.ensure_success()?;
    let body = output.body;
    let rows = body.table.map(|t| t.rows.into_vec()).unwrap_or_default();
    Ok((body.neigh_count, rows))
}

/// Unwraps the `cli_conf` response down to the raw text table carried
/// in its body.
pub fn parse_config_response(raw: &str) -> Result<String> {
    let envelope: Envelope<String> =
        serde_json::from_str(raw).context("malformed config response envelope")?;
    let output = envelope.ins_api.outputs.output;
    output.ensure_success()?;
    Ok(output.body)
}
