use serde::Serialize;
use tracing::debug;

use crate::action::Action;
use crate::player::Player;

pub const DEFAULT_TURN_SLOTS: usize = 3;
pub const MAX_TURN_SLOTS: usize = 16;

/// Fixed-size list of actions submitted for one turn.
///
/// Short logs are padded with `Idle`. A log that does not fit is thrown
/// away entirely and the turn is spent idling. Slot counts above
/// [`MAX_TURN_SLOTS`] are clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TurnPlan {
    actions: Vec<Action>,
}

impl TurnPlan {
    pub fn idle(slots: usize) -> Self {
        Self {
            actions: vec![Action::Idle; slots.min(MAX_TURN_SLOTS)],
        }
    }

    pub fn from_log(log: &[Action], slots: usize) -> Self {
        let slots = slots.min(MAX_TURN_SLOTS);
        if log.len() > slots {
            debug!(
                target: "player_core.turn",
                requested = log.len(),
                slots,
                "turn overflow, idling"
            );
            return Self::idle(slots);
        }

        let mut actions = log.to_vec();
        actions.resize(slots, Action::Idle);
        Self { actions }
    }

    pub fn from_player(player: &Player, slots: usize) -> Self {
        Self::from_log(player.log(), slots)
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.actions.iter().map(|action| action.label()).collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn is_idle(&self) -> bool {
        self.actions.iter().all(|action| *action == Action::Idle)
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_log_idles() {
        let plan = TurnPlan::from_log(&[], DEFAULT_TURN_SLOTS);
        assert_eq!(vec!["idle", "idle", "idle"], plan.labels());
        assert!(plan.is_idle());
    }

    #[test]
    fn short_log_is_padded() {
        let mut player = Player::new();
        player.use_card_big_mana();
        let plan = TurnPlan::from_player(&player, DEFAULT_TURN_SLOTS);
        assert_eq!(vec!["use_card_big_mana", "idle", "idle"], plan.labels());
        assert!(!plan.is_idle());
    }

    #[test]
    fn exact_fit_is_kept() {
        let log = [Action::Attack1, Action::Attack2, Action::Push];
        let plan = TurnPlan::from_log(&log, 3);
        assert_eq!(log.to_vec(), plan.into_actions());
    }

    #[test]
    fn overflow_discards_everything() {
        let mut player = Player::new();
        player.attack1();
        player.use_card_big_hp();
        player.defend();
        let plan = TurnPlan::from_player(&player, DEFAULT_TURN_SLOTS);
        assert_eq!(TurnPlan::idle(DEFAULT_TURN_SLOTS), plan);
    }

    #[test]
    fn huge_slot_count_is_clamped() {
        let plan = TurnPlan::from_log(&[Action::Defend], usize::MAX);
        assert_eq!(MAX_TURN_SLOTS, plan.len());
        assert_eq!(Action::Defend, plan.actions()[0]);
        assert_eq!(MAX_TURN_SLOTS, TurnPlan::idle(usize::MAX).len());
    }

    #[test]
    fn zero_slots_yields_empty_plan() {
        let plan = TurnPlan::from_log(&[], 0);
        assert!(plan.is_empty());
        assert_eq!(0, plan.len());
    }
}
