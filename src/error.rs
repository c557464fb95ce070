//! Error types for catalog builds.

use std::path::PathBuf;

/// Errors that abort a catalog build
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The source file is missing or unreadable
    #[error("Cannot read source file '{path}': {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source file is not a JSON array of paper records
    #[error("Source file '{path}' is not a valid JSON paper array: {source}")]
    ParseSource {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The output file could not be written
    #[error("Cannot write output file '{path}': {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document could not be serialized
    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A configured override names a topic that does not exist
    #[error("Unknown topic '{topic}' in override for DOI {doi}")]
    UnknownTopic { doi: String, topic: String },

    /// A configured override lists no topics
    #[error("Override for DOI {0} lists no topics")]
    EmptyOverride(String),
}

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
