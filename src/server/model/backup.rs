//! Backup file naming and outcome.

use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Format used in backup file names.
const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Format used in the backup message caption.
const CAPTION_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// File name of the backup taken at `at`.
///
/// e.g. `valor_backup_2025-07-04_12-30-00.json`
pub fn backup_file_name(at: DateTime<Utc>) -> String {
    format!("valor_backup_{}.json", at.format(FILE_TIMESTAMP_FORMAT))
}

/// Caption sent alongside the backup attachment.
pub fn backup_caption(at: DateTime<Utc>) -> String {
    format!(
        "⏱️ Minute Leaderboard Backup ({})",
        at.format(CAPTION_TIMESTAMP_FORMAT)
    )
}

/// A backup that was written and transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupOutcome {
    pub path: PathBuf,
    pub entries: usize,
}
