use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlarmError {
    #[error("alarm sound not found at {0}")]
    MissingAsset(PathBuf),

    #[error("no alarm sound configured")]
    NoAsset,

    #[error("no audio player available on this system")]
    NoPlayer,

    #[error("audio I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
