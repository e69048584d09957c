use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("failed to read stock data from '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stock data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The file parsed but held neither a record array nor a `data` envelope.
    #[error("stock data has an unexpected shape; expected an array of records")]
    UnexpectedShape,
}
