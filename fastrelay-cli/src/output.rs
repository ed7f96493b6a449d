//! Result rendering for stdout.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use fastrelay_types::LatencyMeasurement;

use crate::cli::OutputFormat;

/// Relay directory hostnames carry the protocol as a suffix.
const HOSTNAME_SUFFIX: &str = "-wireguard";

pub fn short_hostname(hostname: &str) -> &str {
    hostname.strip_suffix(HOSTNAME_SUFFIX).unwrap_or(hostname)
}

/// Render ranked entries. `single` selects the single-best shape: a bare
/// relay record in JSON rather than a ranked array.
pub fn render(format: OutputFormat, entries: &[LatencyMeasurement], single: bool) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(entries
            .iter()
            .map(|m| short_hostname(m.hostname()))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => match entries {
            [best] if single => Ok(serde_json::to_string(&best.server)?),
            _ => Ok(serde_json::to_string(entries)?),
        },
        OutputFormat::Table => Ok(render_table(entries)),
    }
}

fn render_table(entries: &[LatencyMeasurement]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Hostname", "Location", "Provider", "Latency"]);

    for (rank, m) in entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&m.server.hostname),
            Cell::new(m.server.location()),
            Cell::new(if m.server.provider.is_empty() { "-" } else { m.server.provider.as_str() }),
            Cell::new(format!("{:.1} ms", m.round_trip_ms())).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}
