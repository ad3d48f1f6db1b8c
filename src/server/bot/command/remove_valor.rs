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

pub const NAME: &str = "removevalor";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Remove Valor points")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "member", "Member to deduct from")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "amount", "Valor to remove")
                .required(true),
        )
}

/// Removes valor and replies with the new total. Ranks are not re-checked.
pub async fn run(
    state: &AppState,
    gateway: &SerenityGuild,
    ctx: &Context,
    command: &CommandInteraction,
    actor: &Actor,
) -> Result<(), AppError> {
    let user_id = user_option(command, "member")?;
    let amount = integer_option(command, "amount")?;
    let target = resolve_member(ctx, gateway.guild_id(), user_id).await?;

    let change = ValorService::new(&state.store, gateway)
        .remove_valor(actor, &target, amount)
        .await?;

    respond(ctx, command, &change.to_string(), false).await
}
