use std::path::PathBuf;
use thiserror::Error;

/// Failures during a single backup tick.
///
/// The scheduler logs every variant and continues with the next tick.
#[derive(Error, Debug)]
pub enum BackupError {
    /// No channel with the configured backup name exists.
    ///
    /// The tick is skipped without writing a file.
    #[error("Backup channel '{0}' not found")]
    DestinationNotFound(String),

    /// The ledger snapshot could not be serialized.
    #[error("Failed to serialize valor snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backup file could not be written.
    #[error("Failed to write backup file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Resolving the destination or uploading the file failed.
    ///
    /// Boxed due to large size.
    #[error("Failed to transmit backup: {0}")]
    Transmit(Box<serenity::Error>),
}

impl From<serenity::Error> for BackupError {
    fn from(err: serenity::Error) -> Self {
        BackupError::Transmit(Box::new(err))
    }
}
