use dioxus_logger::tracing;
use serenity::all::{CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption};

use crate::server::{
    bot::{
        command::{integer_option, resolve_member, respond, user_option},
        gateway::SerenityGuild,
    },
    error::AppError,
    model::member::Actor,
    service::valor::ValorService,
    state::AppState,
};

pub const NAME: &str = "addvalor";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Add Valor points")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "member", "Member to award")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "amount", "Valor to add")
                .required(true),
        )
}

/// Adds valor, replies with the new total, then runs the promotion pass.
///
/// The reply goes out before the promotion pass so role changes cannot delay the
/// interaction response.
pub async fn run(
    state: &AppState,
    gateway: &SerenityGuild,
    ctx: &Context,
    command: &CommandInteraction,
    actor: &Actor,
) -> Result<(), AppError> {
    let user_id = user_option(command, "member")?;
    let amount = integer_option(command, "amount")?;
    let mut target = resolve_member(ctx, gateway.guild_id(), user_id).await?;

    let service = ValorService::new(&state.store, gateway);
    let change = service.add_valor(actor, &target, amount).await?;

    respond(ctx, command, &change.to_string(), false).await?;

    let promotions = service.promote(&mut target).await?;
    tracing::debug!(
        "Promotion pass for {} granted {} ranks",
        target.id,
        promotions.len()
    );

    Ok(())
}
