//! Discord bot integration.
//!
//! The bot registers the valor slash commands in its home guild, dispatches command
//! interactions to the service layer and starts the backup scheduler once the gateway
//! connection is ready.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild, role and channel data for role and channel lookups
//! - `GUILD_MEMBERS` - Member data for display names on the leaderboard (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod gateway;
pub mod handler;
pub mod start;
