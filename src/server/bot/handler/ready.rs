//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway. The handler:
//! - Logs connection information
//! - Registers the guild slash commands
//! - Starts the backup scheduler on the first ready event

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::server::{
    bot::{command, gateway::SerenityBackupSink},
    scheduler::backup,
    state::AppState,
};

/// Handles the ready event when the bot connects to Discord.
///
/// Fires again after every reconnect. Commands are re-registered each time, which is
/// idempotent; the scheduler is only started once.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `scheduler_started` - Flag guarding the one-time scheduler start
/// - `ctx` - Discord context for HTTP access
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    state: &AppState,
    scheduler_started: &AtomicBool,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    command::register(&ctx, state.guild_id).await;

    if scheduler_started.swap(true, Ordering::SeqCst) {
        return;
    }

    let sink = Arc::new(SerenityBackupSink::new(ctx.http.clone(), state.guild_id));
    if let Err(e) = backup::start_scheduler(state.store.clone(), sink, state.backup.clone()).await
    {
        tracing::error!("Failed to start backup scheduler: {}", e);
        scheduler_started.store(false, Ordering::SeqCst);
    }
}
