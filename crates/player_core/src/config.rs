use serde::Deserialize;

use crate::error::ConfigError;
use crate::player::{Player, Stats};
use crate::turn::{DEFAULT_TURN_SLOTS, MAX_TURN_SLOTS};

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    #[serde(default)]
    pub starting: Stats,
    #[serde(default)]
    pub turn: TurnConfig,
}

impl PlayerConfig {
    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        let cfg: PlayerConfig = toml::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.turn.slots {
            Some(0) => Err(ConfigError::ZeroSlots),
            Some(slots) if slots > MAX_TURN_SLOTS => Err(ConfigError::TooManySlots(slots)),
            _ => Ok(()),
        }
    }

    pub fn spawn(&self) -> Player {
        Player::from_stats(self.starting)
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct TurnConfig {
    #[serde(default)]
    pub slots: Option<usize>,
}

impl TurnConfig {
    pub fn slots_or_default(&self) -> usize {
        self.slots.unwrap_or(DEFAULT_TURN_SLOTS)
    }
}
