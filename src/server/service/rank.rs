//! Rank resolution and role reconciliation.
//!
//! Threshold ranks are granted automatically as valor grows; valid ranks can be
//! assigned by hand. Both paths strip the member's other rank roles before granting
//! the new one, so a member normally holds a single rank role.

use dioxus_logger::tracing;
use serenity::all::RoleId;

use crate::server::{
    error::{command::CommandError, AppError},
    model::{
        member::{GuildRoles, NotificationOutcome, Promotion, RankedMember},
        rank::{is_valid_rank, RankDefinition, RANK_THRESHOLDS, VALID_RANKS},
    },
    service::gateway::GuildGateway,
};

/// Direct message sent to a promoted member.
pub fn promotion_message(rank: &str, valor: u64) -> String {
    format!("You've been promoted to **{}** with {} Valor!", rank, valor)
}

pub struct RankService<'a, G: GuildGateway> {
    gateway: &'a G,
}

impl<'a, G: GuildGateway> RankService<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Threshold ranks sorted ascending by threshold.
    pub fn threshold_ranks_ascending() -> Vec<RankDefinition> {
        let mut ranks = RANK_THRESHOLDS.to_vec();
        ranks.sort_by_key(|rank| rank.threshold);
        ranks
    }

    /// Grants every threshold rank the member qualifies for but does not hold.
    ///
    /// Ranks are visited lowest threshold first and the pass does not stop at the first
    /// grant: a member clearing several thresholds is granted each rank in turn, each
    /// grant stripping the previous one, and ends on the highest. Ranks whose role does
    /// not exist on the server are skipped. Each grant is followed by a best-effort
    /// direct message; its failure is recorded in the returned promotion and otherwise
    /// ignored.
    ///
    /// # Arguments
    /// - `roles` - Snapshot of the guild's roles
    /// - `member` - Member to promote; `roles` is updated as grants happen
    /// - `valor` - The member's current valor
    ///
    /// # Returns
    /// - `Ok(Vec<Promotion>)` - Grants made, in order (empty if none)
    /// - `Err(AppError::DiscordErr)` - A role could not be added or removed
    pub async fn apply_auto_promotion(
        &self,
        roles: &GuildRoles,
        member: &mut RankedMember,
        valor: u64,
    ) -> Result<Vec<Promotion>, AppError> {
        let mut promotions = Vec::new();

        for rank in Self::threshold_ranks_ascending() {
            let Some(role) = roles.find(rank.name) else {
                continue;
            };
            if valor < rank.threshold || member.has_role(role) {
                continue;
            }

            let threshold_roles = RANK_THRESHOLDS.iter().filter_map(|r| roles.find(r.name));
            let stripped = self.strip_roles(member, threshold_roles, role).await?;

            self.gateway.add_member_role(member.id, role).await?;
            member.roles.insert(role);

            let notification = match self
                .gateway
                .direct_message(member.id, &promotion_message(rank.name, valor))
                .await
            {
                Ok(()) => NotificationOutcome::Delivered,
                Err(_) => NotificationOutcome::Undelivered,
            };

            tracing::info!(
                "Promoted {} ({}) to {} at {} valor",
                member.display_name,
                member.id,
                rank.name,
                valor
            );

            promotions.push(Promotion {
                rank: rank.name,
                role,
                stripped,
                notification,
            });
        }

        Ok(promotions)
    }

    /// Assigns a valid rank by hand, ignoring valor.
    ///
    /// Strips every other valid-rank role the member holds, then grants the requested
    /// one.
    ///
    /// # Arguments
    /// - `roles` - Snapshot of the guild's roles
    /// - `member` - Member receiving the rank; `roles` is updated
    /// - `rank_name` - Exact rank name
    ///
    /// # Returns
    /// - `Ok(RoleId)` - The granted role
    /// - `Err(CommandError::InvalidRank)` - Name not in the valid-rank list
    /// - `Err(CommandError::RoleNotFound)` - No role of that name on the server
    /// - `Err(AppError::DiscordErr)` - A role could not be added or removed
    pub async fn assign_manual_rank(
        &self,
        roles: &GuildRoles,
        member: &mut RankedMember,
        rank_name: &str,
    ) -> Result<RoleId, AppError> {
        if !is_valid_rank(rank_name) {
            return Err(CommandError::InvalidRank(rank_name.to_string()).into());
        }
        let role = roles
            .find(rank_name)
            .ok_or_else(|| CommandError::RoleNotFound(rank_name.to_string()))?;

        let rank_roles = VALID_RANKS.iter().filter_map(|name| roles.find(name));
        self.strip_roles(member, rank_roles, role).await?;

        self.gateway.add_member_role(member.id, role).await?;
        member.roles.insert(role);

        tracing::info!(
            "Assigned rank {} to {} ({})",
            rank_name,
            member.display_name,
            member.id
        );

        Ok(role)
    }

    /// Removes each candidate role the member holds, except `keep`.
    async fn strip_roles(
        &self,
        member: &mut RankedMember,
        candidates: impl Iterator<Item = RoleId>,
        keep: RoleId,
    ) -> Result<Vec<RoleId>, AppError> {
        let mut stripped = Vec::new();

        for role in candidates {
            if role == keep || !member.has_role(role) {
                continue;
            }
            self.gateway.remove_member_role(member.id, role).await?;
            member.roles.remove(&role);
            stripped.push(role);
        }

        Ok(stripped)
    }
}
