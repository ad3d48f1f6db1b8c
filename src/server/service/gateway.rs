//! Platform capabilities injected into the services.
//!
//! The services never reach for a global Discord client. Instead the bot layer hands
//! them an implementation of these traits bound to one guild, which keeps the
//! business logic testable with in-memory fakes.

use serenity::all::{ChannelId, RoleId, UserId};
use serenity::async_trait;
use std::path::Path;

use crate::server::model::member::GuildRoles;

/// Role and member operations within a single guild.
#[async_trait]
pub trait GuildGateway: Send + Sync {
    /// Current snapshot of the guild's roles.
    async fn roles(&self) -> Result<GuildRoles, serenity::Error>;

    /// Grants a role to a member.
    async fn add_member_role(&self, member: UserId, role: RoleId) -> Result<(), serenity::Error>;

    /// Removes a role from a member.
    async fn remove_member_role(
        &self,
        member: UserId,
        role: RoleId,
    ) -> Result<(), serenity::Error>;

    /// Sends a direct message to a member.
    ///
    /// Fails when the member does not accept direct messages.
    async fn direct_message(&self, member: UserId, content: &str) -> Result<(), serenity::Error>;

    /// Display name of a member from local state only, or `None` if they are not known.
    ///
    /// Never reaches the network, so it is safe to call once per ledger entry while an
    /// interaction is waiting for its first response.
    fn cached_display_name(&self, member: UserId) -> Option<String>;
}

/// Destination for backup snapshots.
#[async_trait]
pub trait BackupSink: Send + Sync {
    /// Resolves a destination channel by name.
    ///
    /// # Returns
    /// - `Ok(Some(ChannelId))` - A channel with that name exists
    /// - `Ok(None)` - No such channel
    /// - `Err(serenity::Error)` - The channel list could not be fetched
    async fn find_destination(&self, name: &str) -> Result<Option<ChannelId>, serenity::Error>;

    /// Uploads a backup file with a caption.
    async fn send_backup(
        &self,
        destination: ChannelId,
        caption: &str,
        path: &Path,
    ) -> Result<(), serenity::Error>;
}
