//! Error types for ipnviz_io crate.

use thiserror::Error;

/// Everything that can go wrong while reading or writing a recording.
#[derive(Error, Debug)]
pub enum FeedError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// A line that is not a valid record
    #[error("Invalid record on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Recording contains no records")]
    Empty,

    /// The first record is not a setup record
    #[error("Line {line}: tick record before the setup record")]
    MissingSetup { line: usize },

    #[error("Line {line}: second setup record")]
    DuplicateSetup { line: usize },

    /// A tick whose node or body count differs from the setup
    #[error("Line {line}: tick has {nodes} nodes and {bodies} bodies, setup declared {expected_nodes} and {expected_bodies}")]
    Misaligned {
        line: usize,
        nodes: usize,
        bodies: usize,
        expected_nodes: usize,
        expected_bodies: usize,
    },

    /// A tick event or link naming a node the setup never declared
    #[error("Line {line}: {field} refers to node {index}, setup declared {nodes} nodes")]
    IndexOutOfRange {
        line: usize,
        field: &'static str,
        index: usize,
        nodes: usize,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for ipnviz_io operations.
pub type Result<T> = std::result::Result<T, FeedError>;
