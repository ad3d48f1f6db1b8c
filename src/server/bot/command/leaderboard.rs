use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::server::{
    bot::{
        command::{follow_up, respond},
        gateway::SerenityGuild,
    },
    error::AppError,
    service::valor::ValorService,
    state::AppState,
};

pub const NAME: &str = "leaderboard";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Show Valor leaderboard")
}

/// Posts the leaderboard, first page as the response and the rest as follow-ups.
pub async fn run(
    state: &AppState,
    gateway: &SerenityGuild,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let pages = ValorService::new(&state.store, gateway).leaderboard().await;

    let mut pages = pages.iter();
    if let Some(first) = pages.next() {
        respond(ctx, command, first, false).await?;
    }
    for page in pages {
        follow_up(ctx, command, page).await?;
    }

    Ok(())
}
