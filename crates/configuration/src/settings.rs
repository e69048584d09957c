use std::path::PathBuf;

use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: Server,
    pub data: DataSource,
}

/// Bind parameters for the HTTP API.
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

/// Where stock records come from.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSource {
    /// Use the built-in mock generator instead of reading `stock_data_path`.
    pub use_mock_data: bool,
    /// JSON corpus file read at startup when `use_mock_data` is false.
    pub stock_data_path: PathBuf,
    /// How many records the mock generator produces.
    #[serde(default = "default_mock_records")]
    pub mock_records: usize,
}

fn default_mock_records() -> usize {
    100
}
