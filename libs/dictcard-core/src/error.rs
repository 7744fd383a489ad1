//! Error types for dictcard-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using DictError.
pub type Result<T> = std::result::Result<T, DictError>;

/// Errors raised while preparing or reading dictionary pages.
///
/// Missing fields inside a page are never errors; the extractor drops or
/// omits them instead.
#[derive(Debug, Error)]
pub enum DictError {
    #[error("invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
