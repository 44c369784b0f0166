//! Player state exposed to turn scripts.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod script;
pub mod turn;

pub use action::Action;
pub use config::{PlayerConfig, TurnConfig};
pub use error::{ActionParseError, ConfigError};
pub use player::{Player, Stats};
pub use script::TurnScript;
pub use turn::{TurnPlan, DEFAULT_TURN_SLOTS, MAX_TURN_SLOTS};
