use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum LibraryError {
    #[error("invalid year: {0:?}")]
    InvalidYear(String),
    #[error("failed to decode library file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode library: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LibraryError {
    /// Stable code used in the `--json` error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            LibraryError::InvalidYear(_) => "INVALID_YEAR",
            LibraryError::Decode { .. } => "DECODE_ERROR",
            LibraryError::Encode(_) => "INTERNAL",
            LibraryError::Io { .. } => "IO_ERROR",
        }
    }
}
