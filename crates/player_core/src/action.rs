use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ActionParseError;

/// Everything a scripted player can ask for during a turn.
///
/// Each variant serializes as the label that ends up in a [`Player`] log.
///
/// [`Player`]: crate::Player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Attack1,
    Attack2,
    Attack3,
    Defend,
    Run,
    #[serde(rename = "runopp")]
    RunOpp,
    #[serde(rename = "runattack")]
    RunAttack,
    Push,
    UseCardSmallHp,
    UseCardBigHp,
    UseCardSmallMana,
    UseCardBigMana,
    Idle,
    Cooldown,
}

impl Action {
    pub const ALL: [Action; 14] = [
        Action::Attack1,
        Action::Attack2,
        Action::Attack3,
        Action::Defend,
        Action::Run,
        Action::RunOpp,
        Action::RunAttack,
        Action::Push,
        Action::UseCardSmallHp,
        Action::UseCardBigHp,
        Action::UseCardSmallMana,
        Action::UseCardBigMana,
        Action::Idle,
        Action::Cooldown,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Action::Attack1 => "attack1",
            Action::Attack2 => "attack2",
            Action::Attack3 => "attack3",
            Action::Defend => "defend",
            Action::Run => "run",
            Action::RunOpp => "runopp",
            Action::RunAttack => "runattack",
            Action::Push => "push",
            Action::UseCardSmallHp => "use_card_small_hp",
            Action::UseCardBigHp => "use_card_big_hp",
            Action::UseCardSmallMana => "use_card_small_mana",
            Action::UseCardBigMana => "use_card_big_mana",
            Action::Idle => "idle",
            Action::Cooldown => "cooldown",
        }
    }

    /// Log entries appended when this action is performed, in order.
    ///
    /// Big cards occupy a second turn slot with `Idle`. `Cooldown` is
    /// recorded as `Idle`, so it never shows up in a log itself.
    pub const fn entries(self) -> &'static [Action] {
        match self {
            Action::Attack1 => &[Action::Attack1],
            Action::Attack2 => &[Action::Attack2],
            Action::Attack3 => &[Action::Attack3],
            Action::Defend => &[Action::Defend],
            Action::Run => &[Action::Run],
            Action::RunOpp => &[Action::RunOpp],
            Action::RunAttack => &[Action::RunAttack],
            Action::Push => &[Action::Push],
            Action::UseCardSmallHp => &[Action::UseCardSmallHp],
            Action::UseCardBigHp => &[Action::UseCardBigHp, Action::Idle],
            Action::UseCardSmallMana => &[Action::UseCardSmallMana],
            Action::UseCardBigMana => &[Action::UseCardBigMana, Action::Idle],
            Action::Idle | Action::Cooldown => &[Action::Idle],
        }
    }

    pub const fn slot_cost(self) -> usize {
        self.entries().len()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.label() == s)
            .ok_or_else(|| ActionParseError::Unknown(s.to_owned()))
    }
}
