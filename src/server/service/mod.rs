//! Service layer for business logic.
//!
//! Services sit between the bot layer and the point store. They work on domain models
//! and reach Discord only through the capability traits in `gateway`, which the bot
//! layer implements on top of Serenity:
//!
//! - `rank` - threshold promotion and manual rank assignment
//! - `valor` - add/remove valor, rank command and leaderboard
//! - `backup` - one backup tick

pub mod backup;
pub mod gateway;
pub mod rank;
pub mod valor;

#[cfg(test)]
mod test;
