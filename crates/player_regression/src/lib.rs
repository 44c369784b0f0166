//! Helpers for deterministic regression tests.

use player_core::{Action, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

pub const DEFAULT_SEED: u64 = 42;

/// Seeded sequence of actions drawn from the full vocabulary.
pub fn random_script(seed: u64, len: usize) -> Vec<Action> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| Action::ALL[rng.gen_range(0..Action::ALL.len())])
        .collect()
}

/// Performs every action of `script` on `player`, in order.
pub fn run_script(player: &mut Player, script: &[Action]) {
    for &action in script {
        player.perform(action);
    }
}

/// Counters and log labels as JSON, keys in sorted order.
pub fn trace(player: &Player) -> serde_json::Value {
    json!({
        "health": player.health(),
        "ki": player.ki(),
        "log": player.labels(),
        "mana": player.mana(),
    })
}
