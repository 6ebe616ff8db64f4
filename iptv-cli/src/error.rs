use m3u_filter::FilterError;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this error: 2 for configuration problems,
    /// 3 for an unreachable source, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Filter(
                FilterError::Config(_)
                | FilterError::InvalidKind(_)
                | FilterError::ListFile { .. },
            ) => 2,
            AppError::SourceUnavailable(_) => 3,
            _ => 1,
        }
    }
}
