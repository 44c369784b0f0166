use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionParseError {
    #[error("unknown action label `{0}`")]
    Unknown(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid player config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("turn.slots must be at least 1")]
    ZeroSlots,
    #[error("turn.slots = {0} exceeds the maximum of {}", crate::turn::MAX_TURN_SLOTS)]
    TooManySlots(usize),
}
