// Error types for tag reading

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while reading MP3 metadata
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no ID3v1 tag found")]
    NoLegacyTag,

    #[error("frame {frame} declares {needed} bytes but only {available} remain in the file")]
    Truncated {
        frame: String,
        needed: u64,
        available: u64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
