use crate::lldp::domain::ConfigTableSchema;

/// Parses the fixed-format text table carried in the config-style
/// response body.
///
/// Skips `schema.header_lines` lines, takes the next `count` lines,
/// strips surrounding whitespace and splits each on runs of whitespace
/// into a token list.
///
/// The contract degrades silently by design: a body with fewer than
/// `header_lines + count` lines yields a truncated (possibly empty)
/// result, and lines with fewer tokens than the schema's column
/// indices yield short rows. The correlator treats short rows as
/// non-matching instead of faulting.
pub fn parse_config_table(
    body: &str,
    count: usize,
    schema: &ConfigTableSchema,
) -> Vec<Vec<String>> {
    body.lines()
        .skip(schema.header_lines)
        .take(count)
        .map(|line| {
            line.trim()
                .split_whitespace()
                .map(str::to_string)
                .collect()
        })
        .collect()
}
