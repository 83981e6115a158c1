//! # ipnviz IO
//!
//! Reading and writing snapshot recordings for replay.

/// Error types and result aliases for recording I/O
pub mod error;
/// JSON-lines recordings, optionally gzip-compressed
pub mod recording;

pub use error::{FeedError, Result};
pub use recording::{RecordLine, Recording, RecordingWriter};
