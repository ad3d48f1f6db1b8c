//! Backup snapshot logic.
//!
//! One backup tick resolves the destination channel, writes the current ledger to a
//! timestamped file and uploads it with a caption. The scheduler decides when ticks
//! happen and what to do with failures.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::server::{
    config::BackupConfig,
    data::PointStore,
    error::backup::BackupError,
    model::{
        backup::{backup_caption, backup_file_name, BackupOutcome},
        valor::ValorLedger,
    },
    service::gateway::BackupSink,
};

/// Serializes a ledger as JSON indented with four spaces.
pub fn serialize_ledger(ledger: &ValorLedger) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    ledger.serialize(&mut serializer)?;
    Ok(buf)
}

pub struct BackupService<'a, S: BackupSink> {
    store: &'a PointStore,
    sink: &'a S,
    config: &'a BackupConfig,
}

impl<'a, S: BackupSink> BackupService<'a, S> {
    pub fn new(store: &'a PointStore, sink: &'a S, config: &'a BackupConfig) -> Self {
        Self {
            store,
            sink,
            config,
        }
    }

    /// Runs one backup tick.
    ///
    /// The destination is resolved first so a missing channel never leaves a file
    /// behind. Files accumulate; nothing is rotated or cleaned up.
    ///
    /// # Arguments
    /// - `now` - Tick time, used for the file name and caption
    ///
    /// # Returns
    /// - `Ok(BackupOutcome)` - File written and uploaded
    /// - `Err(BackupError::DestinationNotFound)` - No channel with the configured name
    /// - `Err(BackupError::Serialize)` - Snapshot could not be serialized
    /// - `Err(BackupError::Write)` - File could not be written
    /// - `Err(BackupError::Transmit)` - Channel lookup or upload failed
    pub async fn run_tick(&self, now: DateTime<Utc>) -> Result<BackupOutcome, BackupError> {
        let destination = self
            .sink
            .find_destination(&self.config.channel_name)
            .await?
            .ok_or_else(|| BackupError::DestinationNotFound(self.config.channel_name.clone()))?;

        let ledger = self.store.snapshot().await;
        let contents = serialize_ledger(&ledger)?;

        let path = self.config.dir.join(backup_file_name(now));
        tokio::fs::write(&path, contents)
            .await
            .map_err(|source| BackupError::Write {
                path: path.clone(),
                source,
            })?;

        self.sink
            .send_backup(destination, &backup_caption(now), &path)
            .await?;

        tracing::info!(
            "Successfully backed up {} valor records to {}",
            ledger.len(),
            path.display()
        );

        Ok(BackupOutcome {
            path,
            entries: ledger.len(),
        })
    }
}
