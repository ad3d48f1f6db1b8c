//! Error types for the bot.
//!
//! `AppError` is the top-level error type wrapping the domain-specific errors. Command
//! errors carry their user-visible reply text in their `Display` output, so the
//! interaction layer can send them inline without further mapping. Everything else is
//! logged server-side and never reaches end users.

pub mod backup;
pub mod command;
pub mod config;
pub mod internal;
pub mod store;

use thiserror::Error;

use crate::server::error::{
    backup::BackupError, command::CommandError, config::ConfigError, internal::InternalError,
    store::StoreError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Fatal, as it occurs before the bot connects.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// User-correctable command failure, replied inline.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Backup tick failure, logged by the scheduler.
    #[error(transparent)]
    BackupErr(#[from] BackupError),

    /// Points document could not be read.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Unexpected internal state.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// I/O error, e.g. binding the keep-alive listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
