//! Bot state shared across event handlers.
//!
//! The state is initialized once during startup and cloned into the Discord event
//! handler. It holds the point store and the settings the handlers and the backup
//! scheduler need; platform clients are taken from the Serenity context per event.

use serenity::all::GuildId;

use crate::server::{config::BackupConfig, data::PointStore};

/// Shared resources for command handling and backups.
///
/// All fields are cheap to clone: `PointStore` shares its ledger through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Valor scores shared by command handlers and the backup scheduler.
    pub store: PointStore,

    /// Guild commands are registered in and backups are resolved from.
    pub guild_id: GuildId,

    /// Backup directory and destination channel name.
    pub backup: BackupConfig,
}

impl AppState {
    /// Creates a new state with the provided dependencies.
    ///
    /// # Arguments
    /// - `store` - Point store loaded at startup
    /// - `guild_id` - Home guild of the bot
    /// - `backup` - Backup settings
    pub fn new(store: PointStore, guild_id: GuildId, backup: BackupConfig) -> Self {
        Self {
            store,
            guild_id,
            backup,
        }
    }
}
