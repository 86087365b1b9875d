use std::path::PathBuf;

use thiserror::Error;

/// Errors from cart persistence.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("cart storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cart serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
