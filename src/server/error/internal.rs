use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Occurs when a key in the points document is not a Discord snowflake.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// An interaction was received outside of a guild.
    #[error("Command {0} was invoked outside of a guild")]
    MissingGuild(String),

    /// A required command option was absent or had the wrong type.
    #[error("Command {command} is missing option '{option}'")]
    MissingOption {
        /// Name of the command
        command: String,
        /// Name of the missing option
        option: String,
    },
}
