//! Slash command dispatch.
//!
//! Routes command interactions to their handlers. High-command commands are
//! authorized here, before the handler runs. Command errors are replied ephemerally
//! with their message; any other error is logged and answered with a generic
//! ephemeral failure reply.

use dioxus_logger::tracing;
use serenity::all::{CommandInteraction, Context, Interaction};

use crate::server::{
    bot::{
        command::{self, add_valor, leaderboard, rank, remove_valor, test},
        gateway::SerenityGuild,
    },
    error::{internal::InternalError, AppError},
    service::valor::ValorService,
    state::AppState,
};

/// Reply to a command that failed for a reason the user cannot fix.
const FAILURE_REPLY: &str = "⚠️ Something went wrong while running this command.";

/// Commands restricted to high command.
const HIGH_COMMAND_COMMANDS: [&str; 3] = [add_valor::NAME, remove_valor::NAME, rank::NAME];

/// Handles an incoming interaction.
///
/// Only slash commands are handled; other interaction kinds are ignored.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::debug!(
        "Received slash command {} from {}",
        command.data.name,
        command.user.id
    );

    if let Err(e) = dispatch(state, &ctx, &command).await {
        match &e {
            AppError::CommandErr(err) => {
                tracing::debug!("Command {} rejected: {}", command.data.name, err)
            }
            _ => tracing::error!("Command {} failed: {}", command.data.name, e),
        }
        reply_error(&ctx, &command, &error_reply(&e)).await;
    }
}

/// Reply shown to the invoking user when a command fails.
///
/// Command errors carry their own text; anything else gets a generic message so the
/// details stay in the logs.
fn error_reply(error: &AppError) -> String {
    match error {
        AppError::CommandErr(err) => err.to_string(),
        _ => FAILURE_REPLY.to_string(),
    }
}

async fn dispatch(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let name = command.data.name.as_str();

    if name == test::NAME {
        return test::run(ctx, command).await;
    }

    let guild_id = command
        .guild_id
        .ok_or_else(|| InternalError::MissingGuild(name.to_string()))?;
    let gateway = SerenityGuild::new(ctx.cache.clone(), ctx.http.clone(), guild_id);

    if name == leaderboard::NAME {
        return leaderboard::run(state, &gateway, ctx, command).await;
    }

    if !HIGH_COMMAND_COMMANDS.contains(&name) {
        tracing::warn!("Unknown command received: {}", name);
        return Ok(());
    }

    let actor = command::resolve_actor(&gateway, command).await?;
    ValorService::<SerenityGuild>::authorize(&actor)?;

    match name {
        add_valor::NAME => add_valor::run(state, &gateway, ctx, command, &actor).await,
        remove_valor::NAME => remove_valor::run(state, &gateway, ctx, command, &actor).await,
        _ => rank::run(state, &gateway, ctx, command, &actor).await,
    }
}

/// Sends the error reply as the interaction response.
///
/// Fails harmlessly when the command already responded, e.g. addvalor replies
/// before its promotion pass.
async fn reply_error(ctx: &Context, command: &CommandInteraction, content: &str) {
    if let Err(e) = command::respond(ctx, command, content, true).await {
        tracing::debug!(
            "Could not send error reply for command {}: {}",
            command.data.name,
            e
        );
    }
}
