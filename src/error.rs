//! Error type shared by rendering, resolution and export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The condition name has no entry in the catalog.
    #[error("unknown weather condition: {0:?}")]
    UnknownCondition(String),

    /// The string is not a canonical icon identity.
    #[error("unknown icon identity: {0:?}")]
    UnknownIcon(String),

    /// A drawing surface of this size cannot be allocated.
    #[error("cannot allocate a {width}x{height} drawing surface")]
    Surface { width: u32, height: u32 },

    /// Raster encoding failed.
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An export config or manifest could not be parsed or serialized.
    #[error("invalid JSON document: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
