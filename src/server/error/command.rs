use thiserror::Error;

use crate::server::model::rank::VALID_RANKS;

/// User-correctable command failures.
///
/// The `Display` output of each variant is the exact reply sent back to the
/// invoking user. None of these change any state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Caller does not hold a high-command role.
    #[error("You do not have permission to use this command.")]
    Unauthorized,

    /// Amount was zero or negative.
    ///
    /// Carries the noun used in the reply ("Valor" for add, "Amount" for remove).
    #[error("{0} must be > 0.")]
    InvalidAmount(&'static str),

    /// Rank name is not in the fixed valid-rank list.
    #[error("❌ Invalid rank. Valid: {}", VALID_RANKS.join(", "))]
    InvalidRank(String),

    /// No role with the rank's exact name exists on the server.
    #[error("Role `{0}` not found on server.")]
    RoleNotFound(String),
}
