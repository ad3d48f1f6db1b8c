use std::path::PathBuf;
use thiserror::Error;

/// Failures reading the canonical points document.
///
/// Never fatal: `PointStore::load` logs these and starts from an empty ledger.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The document could not be read (missing, permissions, ...).
    #[error("Failed to read points document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a JSON object of non-negative integers.
    #[error("Malformed points document {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Whether the document simply does not exist yet.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
