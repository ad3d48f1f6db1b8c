mod server;

use dioxus_logger::tracing::{self, Level};

use crate::server::{bot, config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = Config::from_env()?;
    let state = startup::build_state(&config).await;

    tracing::info!("Starting server");

    // Keep-alive endpoint runs alongside the bot; a bind failure is logged, not fatal
    let keep_alive_addr = config.keep_alive_addr;
    tokio::spawn(async move {
        if let Err(e) = startup::serve_keep_alive(keep_alive_addr).await {
            tracing::error!("Keep-alive server error: {}", e);
        }
    });

    // The backup scheduler is started from the ready event once the gateway is connected
    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await
}
