//! Valor command logic.
//!
//! `ValorService` implements the business logic behind the slash commands: awarding
//! and removing valor, manual rank assignment and the leaderboard. It works on
//! platform-neutral models and returns the reply text; sending replies is left to the
//! bot layer.

use dioxus_logger::tracing;
use serenity::all::UserId;

use crate::server::{
    data::PointStore,
    error::{command::CommandError, AppError},
    model::{
        member::{Actor, Promotion, RankedMember},
        rank::is_high_command,
        valor::{MemberScore, ValorChange},
    },
    service::{gateway::GuildGateway, rank::RankService},
    util::parse::parse_u64_from_string,
};

/// Reply to the `test` command.
pub const PING_REPLY: &str = "✅ Bot is responding!";

/// Leaderboard entries per message.
pub const LEADERBOARD_PAGE_SIZE: usize = 25;

/// Heading of every leaderboard message.
pub const LEADERBOARD_HEADER: &str = "🏆 **Valor Leaderboard:**";

/// Reply when no member has any valor record.
pub const LEADERBOARD_EMPTY: &str = "No Valor records yet.";

/// A ledger entry paired with the member's display name, if resolvable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub score: MemberScore,
    pub display_name: Option<String>,
}

/// Renders leaderboard messages from resolved entries.
///
/// Entries keep their order. Members that can no longer be resolved are listed as
/// `Unknown User (<id>)`. Lines are grouped into messages of `LEADERBOARD_PAGE_SIZE`.
///
/// # Returns
/// - `vec![LEADERBOARD_EMPTY]` when there are no entries
/// - One message per page otherwise
pub fn render_leaderboard(entries: &[LeaderboardEntry]) -> Vec<String> {
    if entries.is_empty() {
        return vec![LEADERBOARD_EMPTY.to_string()];
    }

    let lines: Vec<String> = entries
        .iter()
        .map(|entry| match &entry.display_name {
            Some(name) => format!("**{}** — {} V", name, entry.score.valor),
            None => format!(
                "Unknown User ({}) — {} V",
                entry.score.member_id, entry.score.valor
            ),
        })
        .collect();

    lines
        .chunks(LEADERBOARD_PAGE_SIZE)
        .map(|page| format!("{}\n{}", LEADERBOARD_HEADER, page.join("\n")))
        .collect()
}

pub struct ValorService<'a, G: GuildGateway> {
    store: &'a PointStore,
    gateway: &'a G,
}

impl<'a, G: GuildGateway> ValorService<'a, G> {
    pub fn new(store: &'a PointStore, gateway: &'a G) -> Self {
        Self { store, gateway }
    }

    /// Checks that the caller holds a high-command role.
    ///
    /// # Returns
    /// - `Ok(())` - Caller holds `Admiral` or `Vice Admiral`
    /// - `Err(CommandError::Unauthorized)` - Otherwise
    pub fn authorize(actor: &Actor) -> Result<(), CommandError> {
        if is_high_command(&actor.role_names) {
            Ok(())
        } else {
            Err(CommandError::Unauthorized)
        }
    }

    /// Adds valor to a member.
    ///
    /// Does not run the promotion pass; callers reply first and then call `promote`.
    ///
    /// # Arguments
    /// - `actor` - Caller, must be high command
    /// - `target` - Member receiving valor
    /// - `amount` - Valor to add, must be positive
    ///
    /// # Returns
    /// - `Ok(ValorChange::Added)` - New total stored
    /// - `Err(CommandError::Unauthorized)` - Caller not high command
    /// - `Err(CommandError::InvalidAmount)` - `amount <= 0`, nothing stored
    pub async fn add_valor(
        &self,
        actor: &Actor,
        target: &RankedMember,
        amount: i64,
    ) -> Result<ValorChange, CommandError> {
        Self::authorize(actor)?;
        let amount = positive_amount(amount, "Valor")?;

        let total = self.store.add(target.id, amount).await;

        tracing::info!(
            "{} added {} valor to {} ({}), total {}",
            actor.id,
            amount,
            target.display_name,
            target.id,
            total
        );

        Ok(ValorChange::Added {
            display_name: target.display_name.clone(),
            amount,
            total,
        })
    }

    /// Removes valor from a member, clamping at zero.
    ///
    /// Never demotes: rank roles are left untouched.
    ///
    /// # Returns
    /// - `Ok(ValorChange::Removed)` - New total stored
    /// - `Err(CommandError::Unauthorized)` - Caller not high command
    /// - `Err(CommandError::InvalidAmount)` - `amount <= 0`, nothing stored
    pub async fn remove_valor(
        &self,
        actor: &Actor,
        target: &RankedMember,
        amount: i64,
    ) -> Result<ValorChange, CommandError> {
        Self::authorize(actor)?;
        let amount = positive_amount(amount, "Amount")?;

        let total = self.store.subtract(target.id, amount).await;

        tracing::info!(
            "{} removed {} valor from {} ({}), total {}",
            actor.id,
            amount,
            target.display_name,
            target.id,
            total
        );

        Ok(ValorChange::Removed {
            display_name: target.display_name.clone(),
            amount,
            total,
        })
    }

    /// Runs the automatic promotion pass for a member at their stored valor.
    ///
    /// # Returns
    /// - `Ok(Vec<Promotion>)` - Grants made, in order
    /// - `Err(AppError::DiscordErr)` - Roles could not be fetched or changed
    pub async fn promote(&self, member: &mut RankedMember) -> Result<Vec<Promotion>, AppError> {
        let roles = self.gateway.roles().await?;
        let valor = self.store.get(member.id).await;

        RankService::new(self.gateway)
            .apply_auto_promotion(&roles, member, valor)
            .await
    }

    /// Assigns a rank by hand.
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation reply
    /// - `Err(CommandError::Unauthorized)` - Caller not high command
    /// - `Err(CommandError::InvalidRank)` - Unknown rank name
    /// - `Err(CommandError::RoleNotFound)` - Rank role missing on the server
    /// - `Err(AppError::DiscordErr)` - Roles could not be fetched or changed
    pub async fn assign_rank(
        &self,
        actor: &Actor,
        target: &mut RankedMember,
        rank_name: &str,
    ) -> Result<String, AppError> {
        Self::authorize(actor)?;

        let roles = self.gateway.roles().await?;
        RankService::new(self.gateway)
            .assign_manual_rank(&roles, target, rank_name)
            .await?;

        Ok(format!(
            "{} assigned to **{}**.",
            target.display_name, rank_name
        ))
    }

    /// Builds the leaderboard messages.
    ///
    /// Open to everyone. Display names come from the gateway's cached members only, so
    /// the first page is ready well within the interaction response window. Members
    /// missing from the cache and keys that are not valid member IDs are shown as
    /// unknown users.
    pub async fn leaderboard(&self) -> Vec<String> {
        let ledger = self.store.snapshot().await;
        let mut entries = Vec::with_capacity(ledger.len());

        for score in ledger.entries() {
            let display_name = match parse_u64_from_string(score.member_id.clone()) {
                Ok(id) if id != 0 => self.gateway.cached_display_name(UserId::new(id)),
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!("Skipping name lookup for ledger key: {}", e);
                    None
                }
            };
            entries.push(LeaderboardEntry {
                score: score.clone(),
                display_name,
            });
        }

        render_leaderboard(&entries)
    }
}

/// Converts a command amount to a positive valor amount.
fn positive_amount(amount: i64, noun: &'static str) -> Result<u64, CommandError> {
    if amount <= 0 {
        return Err(CommandError::InvalidAmount(noun));
    }
    Ok(amount as u64)
}
