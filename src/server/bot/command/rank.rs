use serenity::all::{CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption};

use crate::server::{
    bot::{
        command::{resolve_member, respond, string_option, user_option},
        gateway::SerenityGuild,
    },
    error::AppError,
    model::member::Actor,
    service::valor::ValorService,
    state::AppState,
};

pub const NAME: &str = "rank";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Assign a rank")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "member", "Member to assign")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "rank", "Rank name")
                .required(true),
        )
}

/// Assigns a rank by hand, regardless of valor.
pub async fn run(
    state: &AppState,
    gateway: &SerenityGuild,
    ctx: &Context,
    command: &CommandInteraction,
    actor: &Actor,
) -> Result<(), AppError> {
    let user_id = user_option(command, "member")?;
    let rank_name = string_option(command, "rank")?;
    let mut target = resolve_member(ctx, gateway.guild_id(), user_id).await?;

    let reply = ValorService::new(&state.store, gateway)
        .assign_rank(actor, &mut target, &rank_name)
        .await?;

    respond(ctx, command, &reply, false).await
}
