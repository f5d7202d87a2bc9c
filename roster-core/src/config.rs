//! Runtime configuration for a roster session.

use std::time::Duration;

use thiserror::Error;

use crate::notify::DEFAULT_TTL;
use crate::roster::Roster;

/// Environment variable holding the notification TTL in milliseconds.
pub const ENV_NOTIFY_MS: &str = "ROSTER_NOTIFY_MS";
/// Environment variable choosing the starting roster (`sample` or `empty`).
pub const ENV_SEED: &str = "ROSTER_SEED";
/// Environment variable toggling confirmation prompts (`true` or `false`).
pub const ENV_CONFIRM: &str = "ROSTER_CONFIRM";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// What the roster starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    /// The four stock adventurers.
    #[default]
    Sample,
    Empty,
}

/// Configuration for creating a roster session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Starting roster.
    pub seed: Seed,

    /// How long a notification stays visible.
    pub notification_ttl: Duration,

    /// Ask before recruiting or removing.
    pub confirm_destructive: bool,

    /// Ask before adding a validated character.
    pub confirm_add: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            seed: Seed::Sample,
            notification_ttl: DEFAULT_TTL,
            confirm_destructive: true,
            confirm_add: false,
        }
    }
}

impl RosterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_NOTIFY_MS) {
            let millis = value
                .trim()
                .parse::<u64>()
                .map_err(|_| invalid(ENV_NOTIFY_MS, &value))?;
            config.notification_ttl = Duration::from_millis(millis);
        }

        if let Some(value) = lookup(ENV_SEED) {
            config.seed = match value.trim().to_ascii_lowercase().as_str() {
                "sample" => Seed::Sample,
                "empty" => Seed::Empty,
                _ => return Err(invalid(ENV_SEED, &value)),
            };
        }

        if let Some(value) = lookup(ENV_CONFIRM) {
            config.confirm_destructive =
                parse_bool(&value).ok_or_else(|| invalid(ENV_CONFIRM, &value))?;
        }

        Ok(config)
    }

    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    pub fn with_confirmations(mut self, confirm: bool) -> Self {
        self.confirm_destructive = confirm;
        self
    }

    pub fn with_add_confirmation(mut self, confirm: bool) -> Self {
        self.confirm_add = confirm;
        self
    }

    /// Build the starting roster.
    pub fn build_roster(&self) -> Roster {
        let roster = match self.seed {
            Seed::Sample => Roster::sample(),
            Seed::Empty => Roster::new(),
        };
        roster.with_notification_ttl(self.notification_ttl)
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
