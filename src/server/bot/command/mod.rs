//! Slash command definitions, registration and shared helpers.
//!
//! Each submodule owns one command: its `NAME`, its `register()` definition and a
//! `run()` handler converting the interaction into domain models, calling the service
//! layer and sending the reply.

pub mod add_valor;
pub mod leaderboard;
pub mod rank;
pub mod remove_valor;

use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, GuildId, ResolvedValue,
    UserId,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::member::{Actor, RankedMember},
    service::gateway::GuildGateway,
};

/// All command definitions, in registration order.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        test::register(),
        add_valor::register(),
        remove_valor::register(),
        rank::register(),
        leaderboard::register(),
    ]
}

/// Registers the slash commands in the guild, replacing any previous set.
///
/// Failure is logged, not fatal: the bot keeps running with whatever commands Discord
/// already has.
pub async fn register(ctx: &Context, guild_id: GuildId) {
    match guild_id.set_commands(&ctx.http, definitions()).await {
        Ok(commands) => tracing::info!(
            "Registered {} slash commands in guild {}",
            commands.len(),
            guild_id
        ),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}

/// Sends the initial interaction response.
pub async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    content: &str,
    ephemeral: bool,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(ephemeral);
    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;
    Ok(())
}

/// Sends an additional message after the initial response.
pub async fn follow_up(
    ctx: &Context,
    command: &CommandInteraction,
    content: &str,
) -> Result<(), AppError> {
    command
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new().content(content),
        )
        .await?;
    Ok(())
}

/// Builds the invoking member with their role names.
pub async fn resolve_actor<G: GuildGateway>(
    gateway: &G,
    command: &CommandInteraction,
) -> Result<Actor, AppError> {
    let roles = gateway.roles().await?;
    let role_names = command
        .member
        .as_ref()
        .map(|member| {
            roles
                .names_of(member.roles.iter())
                .into_iter()
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(Actor::new(command.user.id, role_names))
}

/// Fetches a guild member as a `RankedMember`.
pub async fn resolve_member(
    ctx: &Context,
    guild_id: GuildId,
    user_id: UserId,
) -> Result<RankedMember, AppError> {
    let member = guild_id.member(ctx, user_id).await?;
    Ok(RankedMember::from(&member))
}

fn missing_option(command: &CommandInteraction, option: &str) -> InternalError {
    InternalError::MissingOption {
        command: command.data.name.clone(),
        option: option.to_string(),
    }
}

/// Value of a required user option.
pub fn user_option(command: &CommandInteraction, name: &str) -> Result<UserId, AppError> {
    command
        .data
        .options()
        .into_iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| match opt.value {
            ResolvedValue::User(user, _) => Some(user.id),
            _ => None,
        })
        .ok_or_else(|| missing_option(command, name).into())
}

/// Value of a required integer option.
pub fn integer_option(command: &CommandInteraction, name: &str) -> Result<i64, AppError> {
    command
        .data
        .options()
        .into_iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| match opt.value {
            ResolvedValue::Integer(value) => Some(value),
            _ => None,
        })
        .ok_or_else(|| missing_option(command, name).into())
}

/// Value of a required string option.
pub fn string_option(command: &CommandInteraction, name: &str) -> Result<String, AppError> {
    command
        .data
        .options()
        .into_iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| match opt.value {
            ResolvedValue::String(value) => Some(value.to_string()),
            _ => None,
        })
        .ok_or_else(|| missing_option(command, name).into())
}
