use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or saving the scan log.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error on scan log: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed row in scan log: {0}")]
    Csv(#[from] csv::Error),

    #[error("scan log {} is corrupt: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("could not replace scan log {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}
