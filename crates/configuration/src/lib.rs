// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{Config, DataSource, Server};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, and returns it. Environment variables prefixed with `SIFT_`
/// override file values (e.g. `SIFT_SERVER__PORT=9000`).
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config.toml"))
        .add_source(config::Environment::with_prefix("SIFT").separator("__"))
        .build()?;

    let config = builder.try_deserialize::<Config>()?;

    Ok(config)
}
