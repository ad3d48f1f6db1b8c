use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    config::BackupConfig,
    data::PointStore,
    error::{backup::BackupError, AppError},
    service::{backup::BackupService, gateway::BackupSink},
};

/// Cron expression for the backup job: second 0 of every minute.
const BACKUP_SCHEDULE: &str = "0 * * * * *";

/// How a scheduled tick ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Completed,
    /// The backup channel does not exist; retried on the next tick.
    NoDestination,
    Failed,
    /// A previous tick was still running, this one was dropped.
    Overlapping,
}

/// Starts the backup scheduler
///
/// This scheduler runs every minute and writes the current valor ledger to a
/// timestamped file which is posted to the backup channel. Ticks never overlap: a
/// tick firing while the previous one is still in flight is skipped.
///
/// # Arguments
/// - `store`: Point store to snapshot
/// - `sink`: Destination the backup files are posted to
/// - `config`: Backup directory and channel name
pub async fn start_scheduler<S: BackupSink + 'static>(
    store: PointStore,
    sink: Arc<S>,
    config: BackupConfig,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;
    let in_flight = Arc::new(Mutex::new(()));

    let job = Job::new_async(BACKUP_SCHEDULE, move |_uuid, _lock| {
        let store = store.clone();
        let sink = sink.clone();
        let config = config.clone();
        let in_flight = in_flight.clone();

        Box::pin(async move {
            process_backup(&store, sink.as_ref(), &config, &in_flight, Utc::now()).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Backup scheduler started");

    Ok(())
}

/// Runs one backup tick unless another is still in flight.
///
/// Failures are logged and never propagated, so the scheduler keeps running.
pub async fn process_backup<S: BackupSink>(
    store: &PointStore,
    sink: &S,
    config: &BackupConfig,
    in_flight: &Mutex<()>,
    now: DateTime<Utc>,
) -> TickStatus {
    let Ok(_guard) = in_flight.try_lock() else {
        tracing::warn!("Previous backup still running, skipping tick at {}", now);
        return TickStatus::Overlapping;
    };

    match BackupService::new(store, sink, config).run_tick(now).await {
        Ok(_) => TickStatus::Completed,
        Err(BackupError::DestinationNotFound(name)) => {
            tracing::warn!("Backup channel '{}' not found, skipping tick", name);
            TickStatus::NoDestination
        }
        Err(e) => {
            tracing::error!("Backup failed: {}", e);
            TickStatus::Failed
        }
    }
}
