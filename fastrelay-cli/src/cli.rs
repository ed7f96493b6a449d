use clap::{Parser, ValueEnum};
use fastrelay_client::{CatalogConfig, DEFAULT_DIRECTORY_URL};
use fastrelay_types::config::{DEFAULT_PROBE_TIMEOUT_MS, DEFAULT_SERVER_TYPE};
use fastrelay_types::SelectionConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fastrelay",
    about = "Pick the lowest-latency relay from the relay directory",
    version = env!("CARGO_PKG_VERSION"),
    author
)]
pub struct Cli {
    #[arg(short, long, value_enum, env = "FASTRELAY_OUTPUT", default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    #[arg(short, long, env = "FASTRELAY_COUNTRY", help = "Country code filter, e.g. ch for Switzerland")]
    pub country: Option<String>,

    #[arg(
        short = 't',
        long,
        env = "FASTRELAY_SERVER_TYPE",
        default_value = DEFAULT_SERVER_TYPE,
        help = "Server type, e.g. wireguard or openvpn"
    )]
    pub server_type: String,

    #[arg(short = 'n', long, default_value_t = 1, help = "Number of relays to return")]
    pub count: usize,

    #[arg(short, long, help = "Select diskless (stboot) relays")]
    pub diskless: bool,

    #[arg(long, default_value_t = DEFAULT_PROBE_TIMEOUT_MS, help = "Per-probe ICMP timeout in milliseconds")]
    pub timeout_ms: u64,

    #[arg(long, env = "FASTRELAY_API_URL", default_value = DEFAULT_DIRECTORY_URL, help = "Relay directory base URL")]
    pub api_url: String,

    #[arg(long, help = "Read the catalog from a JSON file instead of the directory")]
    pub catalog_file: Option<PathBuf>,

    #[arg(short, long, env = "RUST_LOG", default_value = "warn", help = "Log filter (error, warn, info, debug, trace)")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Hostname only
    Plain,
    /// Full relay record(s)
    Json,
    /// Ranked table
    Table,
}

impl Cli {
    pub fn selection_config(&self) -> SelectionConfig {
        let country = self.country.as_deref().map(str::trim).filter(|c| !c.is_empty());
        SelectionConfig {
            server_type: self.server_type.clone(),
            country: country.map(str::to_string),
            diskless_only: self.diskless,
            count: self.count,
            probe_timeout_ms: self.timeout_ms,
        }
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig { base_url: self.api_url.clone(), ..Default::default() }
    }
}
