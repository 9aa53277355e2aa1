//! Generation errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a generation run.
///
/// A single product page failing is not one of these; it is recorded as
/// an [`ItemOutcome::Failed`](crate::ItemOutcome::Failed) and the run
/// continues.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The built `index.html` to take asset paths from could not be read.
    #[error("Failed to read asset manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A page rendered as the 404 or error document.
    #[error("Page {url} did not render: {reason}")]
    Page { url: String, reason: String },

    /// An output file or directory could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A page payload could not be serialized into the document.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GenerateError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
