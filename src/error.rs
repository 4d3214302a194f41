use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the tab session crate.
///
/// None of these reach the user during normal tab bookkeeping: store
/// failures are logged and swallowed by the manager. They surface only from
/// build-time configuration (the registry) and explicit settings I/O.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("route {0} is already registered")]
    DuplicateRoute(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
