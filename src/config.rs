//! Process-wide settings, read once at startup from the environment (and `.env`).
//!
//! Parsing goes through a key lookup closure so it can be exercised without mutating
//! the real process environment.

use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_PREFIX, DEFAULT_SAVE_DIR};
use crate::error::ConfigError;
use serenity::model::id::GuildId;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    pub database_url: String,
    pub save_dir: PathBuf,
    pub page_size: usize,
    /// When set, commands from any other guild are ignored.
    pub allowed_guild_id: Option<GuildId>,
    pub prefix: String,
}

// Credentials stay out of debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("save_dir", &self.save_dir)
            .field("page_size", &self.page_size)
            .field("allowed_guild_id", &self.allowed_guild_id)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine; real deployments set the variables directly.
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let discord_token = required("DISCORD_TOKEN")?;
        let database_url = required("DATABASE_URL")?;

        let save_dir = lookup("POKEDEX_SAVE_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_DIR));

        let page_size = match lookup("POKEDEX_PAGE_SIZE") {
            None => DEFAULT_PAGE_SIZE,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "POKEDEX_PAGE_SIZE",
                        reason: format!("expected a positive integer, got `{raw}`"),
                    });
                }
            },
        };

        let allowed_guild_id = match lookup("SERVER_ID") {
            None => None,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(id) if id != 0 => Some(GuildId::new(id)),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "SERVER_ID",
                        reason: format!("expected a non-zero guild id, got `{raw}`"),
                    });
                }
            },
        };

        let prefix = match lookup("COMMAND_PREFIX") {
            None => DEFAULT_PREFIX.to_string(),
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::Invalid {
                    key: "COMMAND_PREFIX",
                    reason: "prefix must not be empty".to_string(),
                });
            }
            Some(raw) => raw.trim().to_string(),
        };

        Ok(Self {
            discord_token,
            database_url,
            save_dir,
            page_size,
            allowed_guild_id,
            prefix,
        })
    }
}
