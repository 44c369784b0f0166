use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::action::Action;

const DEFAULT_HEALTH: i32 = 100;
const DEFAULT_MANA: i32 = 100;
const DEFAULT_KI: i32 = 0;

/// Snapshot of the three resource counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub health: i32,
    pub mana: i32,
    pub ki: i32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            health: DEFAULT_HEALTH,
            mana: DEFAULT_MANA,
            ki: DEFAULT_KI,
        }
    }
}

/// Character state handed to player scripts.
///
/// Actions only record what was asked for; resolving them against the
/// counters happens elsewhere, so every call here is infallible.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Player {
    #[serde(flatten)]
    stats: Stats,
    log: Vec<Action>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a record from counters mirrored out of a running match.
    pub fn from_stats(stats: Stats) -> Self {
        Self {
            stats,
            log: Vec::new(),
        }
    }

    pub fn health(&self) -> i32 {
        self.stats.health
    }

    pub fn mana(&self) -> i32 {
        self.stats.mana
    }

    pub fn ki(&self) -> i32 {
        self.stats.ki
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn log(&self) -> &[Action] {
        &self.log
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.log.iter().map(|action| action.label()).collect()
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    pub fn take_log(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.log)
    }

    /// Appends the log entries for `action`.
    pub fn perform(&mut self, action: Action) {
        for &entry in action.entries() {
            self.log.push(entry);
            trace!(
                target: "player_core.log",
                requested = action.label(),
                entry = entry.label(),
                len = self.log.len(),
                "action recorded"
            );
        }
    }

    pub fn attack1(&mut self) {
        self.perform(Action::Attack1);
    }

    pub fn attack2(&mut self) {
        self.perform(Action::Attack2);
    }

    pub fn attack3(&mut self) {
        self.perform(Action::Attack3);
    }

    pub fn defend(&mut self) {
        self.perform(Action::Defend);
    }

    pub fn run(&mut self) {
        self.perform(Action::Run);
    }

    pub fn run_opp(&mut self) {
        self.perform(Action::RunOpp);
    }

    pub fn run_attack(&mut self) {
        self.perform(Action::RunAttack);
    }

    pub fn push(&mut self) {
        self.perform(Action::Push);
    }

    pub fn use_card_small_hp(&mut self) {
        self.perform(Action::UseCardSmallHp);
    }

    /// Also fills the next slot with `idle`.
    pub fn use_card_big_hp(&mut self) {
        self.perform(Action::UseCardBigHp);
    }

    pub fn use_card_small_mana(&mut self) {
        self.perform(Action::UseCardSmallMana);
    }

    /// Also fills the next slot with `idle`.
    pub fn use_card_big_mana(&mut self) {
        self.perform(Action::UseCardBigMana);
    }

    pub fn idle(&mut self) {
        self.perform(Action::Idle);
    }

    /// Recorded as `idle`.
    pub fn cooldown(&mut self) {
        self.perform(Action::Cooldown);
    }

    /// Leaves the counter alone; the match engine owns health.
    pub fn update_health(&mut self, delta: i32) {
        debug!(
            target: "player_core.hooks",
            delta,
            current = self.stats.health,
            "health hook ignored"
        );
    }

    pub fn update_mana(&mut self, delta: i32) {
        debug!(
            target: "player_core.hooks",
            delta,
            current = self.stats.mana,
            "mana hook ignored"
        );
    }

    pub fn update_ki(&mut self, delta: i32) {
        debug!(
            target: "player_core.hooks",
            delta,
            current = self.stats.ki,
            "ki hook ignored"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_player_defaults() {
        let player = Player::new();
        assert_eq!(100, player.health());
        assert_eq!(100, player.mana());
        assert_eq!(0, player.ki());
        assert!(player.log().is_empty());
    }

    #[test]
    fn single_slot_actions_append_their_label() {
        let cases: [(fn(&mut Player), &str); 12] = [
            (Player::attack1, "attack1"),
            (Player::attack2, "attack2"),
            (Player::attack3, "attack3"),
            (Player::defend, "defend"),
            (Player::run, "run"),
            (Player::run_opp, "runopp"),
            (Player::run_attack, "runattack"),
            (Player::push, "push"),
            (Player::use_card_small_hp, "use_card_small_hp"),
            (Player::use_card_small_mana, "use_card_small_mana"),
            (Player::idle, "idle"),
            (Player::cooldown, "idle"),
        ];
        for (call, label) in cases {
            let mut player = Player::new();
            call(&mut player);
            assert_eq!(vec![label], player.labels());
        }
    }

    #[test]
    fn big_cards_append_idle() {
        let mut player = Player::new();
        player.use_card_big_hp();
        assert_eq!(vec!["use_card_big_hp", "idle"], player.labels());

        let mut player = Player::new();
        player.use_card_big_mana();
        assert_eq!(vec!["use_card_big_mana", "idle"], player.labels());
    }

    #[test]
    fn actions_leave_counters_alone() {
        let mut player = Player::new();
        for action in Action::ALL {
            player.perform(action);
        }
        assert_eq!(Stats::default(), player.stats());
    }

    #[test]
    fn hooks_change_nothing() {
        let mut player = Player::new();
        player.defend();
        let before = player.clone();

        player.update_health(-250);
        player.update_mana(i32::MAX);
        player.update_ki(7);

        assert_eq!(before, player);
    }

    #[test]
    fn calls_accumulate_in_order() {
        let mut player = Player::new();
        player.attack1();
        player.defend();
        player.use_card_big_hp();
        assert_eq!(
            vec!["attack1", "defend", "use_card_big_hp", "idle"],
            player.labels()
        );
    }

    #[test]
    fn take_log_drains() {
        let mut player = Player::from_stats(Stats {
            health: 40,
            mana: 5,
            ki: 20,
        });
        player.push();
        player.run();

        assert_eq!(vec![Action::Push, Action::Run], player.take_log());
        assert!(player.log().is_empty());
        assert_eq!(40, player.health());

        player.attack3();
        player.clear_log();
        assert!(player.log().is_empty());
    }

    #[test]
    fn serializes_flat() {
        let mut player = Player::new();
        player.cooldown();
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(
            serde_json::json!({ "health": 100, "mana": 100, "ki": 0, "log": ["idle"] }),
            json
        );
    }
}
