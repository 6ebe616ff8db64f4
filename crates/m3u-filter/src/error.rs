use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by playlist filtering. All variants are fatal and are
/// raised before any output is written; per-entry anomalies (such as a
/// malformed media URL) never produce an error.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Invalid filter configuration, detected before any processing.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown kind value(s): {0} (valid: live,movie,series,unknown)")]
    InvalidKind(String),

    #[error("failed to read group list file '{}': {source}", path.display())]
    ListFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
