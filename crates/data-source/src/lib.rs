//! Where stock records come from: JSON corpus files on disk, or the mock
//! generator when no real feed is available.

pub mod error;
pub mod loader;
pub mod mock;

pub use error::DataSourceError;
pub use loader::{load_records, parse_records};
pub use mock::{generate_records, generate_with};
