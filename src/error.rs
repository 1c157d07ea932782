//! Error types for config-events.

/// Result type alias for config-events operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading configuration data or setting up
/// reload detection.
///
/// Event construction itself never fails; these errors belong to the
/// fallible edges of the crate (filesystem access, parsing, watcher setup).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to load configuration from a file.
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    /// Failed to deserialize configuration data.
    #[error("Failed to deserialize configuration: {0}")]
    DeserializationError(String),

    /// File watching is not supported or failed to initialize.
    #[error("File watching error: {0}")]
    WatchError(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
