use serenity::all::GuildId;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_GUILD_ID: u64 = 1389641561578541196;
const DEFAULT_POINTS_PATH: &str = "valor_points.json";
const DEFAULT_BACKUP_DIR: &str = ".";
const DEFAULT_BACKUP_CHANNEL: &str = "backup";
const DEFAULT_KEEP_ALIVE_ADDR: &str = "0.0.0.0:8080";

/// Where and how backup snapshots are written and sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupConfig {
    /// Directory backup files are written into.
    pub dir: PathBuf,
    /// Name of the channel backups are posted to.
    pub channel_name: String,
}

pub struct Config {
    pub discord_bot_token: String,
    pub guild_id: GuildId,

    pub points_path: PathBuf,
    pub backup: BackupConfig,

    pub keep_alive_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsable
    /// - `Err(ConfigError::MissingEnvVar)` - `DISCORD_BOT_TOKEN` is not set
    /// - `Err(ConfigError::InvalidEnvVar)` - A set variable failed to parse
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let discord_bot_token = lookup("DISCORD_BOT_TOKEN")
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let guild_id = match lookup("DISCORD_GUILD_ID") {
            Some(value) => match value.parse::<u64>() {
                Ok(id) if id != 0 => GuildId::new(id),
                _ => return Err(invalid("DISCORD_GUILD_ID", value)),
            },
            None => GuildId::new(DEFAULT_GUILD_ID),
        };

        let keep_alive_addr = lookup("KEEP_ALIVE_ADDR")
            .unwrap_or_else(|| DEFAULT_KEEP_ALIVE_ADDR.to_string());
        let keep_alive_addr = keep_alive_addr
            .parse::<SocketAddr>()
            .map_err(|_| invalid("KEEP_ALIVE_ADDR", keep_alive_addr.clone()))?;

        Ok(Self {
            discord_bot_token,
            guild_id,
            points_path: lookup("VALOR_POINTS_PATH")
                .unwrap_or_else(|| DEFAULT_POINTS_PATH.to_string())
                .into(),
            backup: BackupConfig {
                dir: lookup("VALOR_BACKUP_DIR")
                    .unwrap_or_else(|| DEFAULT_BACKUP_DIR.to_string())
                    .into(),
                channel_name: lookup("VALOR_BACKUP_CHANNEL")
                    .unwrap_or_else(|| DEFAULT_BACKUP_CHANNEL.to_string()),
            },
            keep_alive_addr,
        })
    }
}

fn invalid(name: &str, value: String) -> AppError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    }
    .into()
}
