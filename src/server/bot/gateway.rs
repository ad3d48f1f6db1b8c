//! Serenity-backed implementations of the service capability traits.

use dioxus_logger::tracing;
use serenity::all::{
    Cache, ChannelId, CreateAttachment, CreateMessage, GuildId, Http, RoleId, UserId,
};
use serenity::async_trait;
use std::path::Path;
use std::sync::Arc;

use crate::server::{
    model::member::GuildRoles,
    service::gateway::{BackupSink, GuildGateway},
};

/// Audit log reason attached to automated role changes.
const AUDIT_REASON: &str = "Valor rank update";

/// Guild operations bound to one guild.
pub struct SerenityGuild {
    cache: Arc<Cache>,
    http: Arc<Http>,
    guild_id: GuildId,
}

impl SerenityGuild {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>, guild_id: GuildId) -> Self {
        Self {
            cache,
            http,
            guild_id,
        }
    }

    pub fn guild_id(&self) -> GuildId {
        self.guild_id
    }
}

#[async_trait]
impl GuildGateway for SerenityGuild {
    async fn roles(&self) -> Result<GuildRoles, serenity::Error> {
        let roles = self.guild_id.roles(&self.http).await?;
        Ok(roles.values().collect())
    }

    async fn add_member_role(&self, member: UserId, role: RoleId) -> Result<(), serenity::Error> {
        self.http
            .add_member_role(self.guild_id, member, role, Some(AUDIT_REASON))
            .await
    }

    async fn remove_member_role(
        &self,
        member: UserId,
        role: RoleId,
    ) -> Result<(), serenity::Error> {
        self.http
            .remove_member_role(self.guild_id, member, role, Some(AUDIT_REASON))
            .await
    }

    async fn direct_message(&self, member: UserId, content: &str) -> Result<(), serenity::Error> {
        member
            .direct_message(
                (&self.cache, self.http.as_ref()),
                CreateMessage::new().content(content),
            )
            .await?;
        Ok(())
    }

    fn cached_display_name(&self, member: UserId) -> Option<String> {
        let name = self
            .cache
            .member(self.guild_id, member)
            .map(|m| m.display_name().to_string());
        if name.is_none() {
            tracing::trace!("Member {} not in cache", member);
        }
        name
    }
}

/// Backup destination resolving channels by name within one guild.
pub struct SerenityBackupSink {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl SerenityBackupSink {
    pub fn new(http: Arc<Http>, guild_id: GuildId) -> Self {
        Self { http, guild_id }
    }
}

#[async_trait]
impl BackupSink for SerenityBackupSink {
    async fn find_destination(&self, name: &str) -> Result<Option<ChannelId>, serenity::Error> {
        let channels = self.guild_id.channels(&self.http).await?;
        Ok(channels
            .values()
            .find(|channel| channel.name == name)
            .map(|channel| channel.id))
    }

    async fn send_backup(
        &self,
        destination: ChannelId,
        caption: &str,
        path: &Path,
    ) -> Result<(), serenity::Error> {
        let attachment = CreateAttachment::path(path).await?;
        destination
            .send_message(
                &self.http,
                CreateMessage::new().content(caption).add_file(attachment),
            )
            .await?;
        Ok(())
    }
}
