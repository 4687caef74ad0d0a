//! Rules configuration, loadable from JSON or the environment.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::rules::{max_cards_per_player, DEFAULT_CARDS_PER_PLAYER, MAX_PLAYERS};
use crate::domain::tricks::PassPolicy;

pub const ENV_PASS_POLICY: &str = "TIENLEN_PASS_POLICY";
pub const ENV_REQUIRE_OPENING_CARD: &str = "TIENLEN_REQUIRE_OPENING_CARD";
pub const ENV_CARDS_PER_PLAYER: &str = "TIENLEN_CARDS_PER_PLAYER";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidVar {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("invalid rules JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Table rules that vary between house games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub pass_policy: PassPolicy,
    /// First play of the first game must contain the opening card.
    pub require_opening_card: bool,
    pub cards_per_player: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            pass_policy: PassPolicy::ResetOnPlay,
            require_opening_card: true,
            cards_per_player: DEFAULT_CARDS_PER_PLAYER,
        }
    }
}

impl RulesConfig {
    /// Read overrides from `TIENLEN_*` environment variables; unset
    /// variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_PASS_POLICY) {
            config.pass_policy = parse_pass_policy(&raw)?;
        }
        if let Some(raw) = lookup(ENV_REQUIRE_OPENING_CARD) {
            config.require_opening_card = parse_bool(ENV_REQUIRE_OPENING_CARD, &raw)?;
        }
        if let Some(raw) = lookup(ENV_CARDS_PER_PLAYER) {
            let parsed = raw.trim().parse::<u8>();
            config.cards_per_player = parsed.map_err(|e| ConfigError::InvalidVar {
                var: ENV_CARDS_PER_PLAYER,
                value: raw.clone(),
                reason: e.to_string(),
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // The cap for a full table binds every smaller table too.
        let cap = max_cards_per_player(MAX_PLAYERS);
        if self.cards_per_player == 0 || self.cards_per_player as usize > cap {
            return Err(ConfigError::InvalidVar {
                var: ENV_CARDS_PER_PLAYER,
                value: self.cards_per_player.to_string(),
                reason: format!("must be between 1 and {cap}"),
            });
        }
        Ok(())
    }
}

fn parse_pass_policy(raw: &str) -> Result<PassPolicy, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "reset_on_play" | "reset-on-play" | "reset" => Ok(PassPolicy::ResetOnPlay),
        "sticky" => Ok(PassPolicy::Sticky),
        _ => Err(ConfigError::InvalidVar {
            var: ENV_PASS_POLICY,
            value: raw.to_string(),
            reason: "expected reset_on_play or sticky".to_string(),
        }),
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidVar {
            var,
            value: raw.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}
