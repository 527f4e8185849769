//! Failure modes of the RON-backed configuration store.

/// Everything that can go wrong while persisting or restoring a
/// [`crate::Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The `config.ron` file exists but could not be read.
    #[error("config file unreadable: {0}")]
    Read(#[source] std::io::Error),

    /// The config directory or file could not be written.
    #[error("config not writable: {0}")]
    Write(#[source] std::io::Error),

    /// The file's RON content did not deserialize into a config.
    #[error("malformed config: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// The in-memory config did not serialize to RON.
    #[error("config not serializable: {0}")]
    Serialize(#[source] ron::Error),
}
