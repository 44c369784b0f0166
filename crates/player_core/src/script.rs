use std::fmt;

use tracing::debug;

use crate::player::{Player, Stats};
use crate::turn::TurnPlan;

type Condition = Box<dyn Fn(&Stats) -> bool>;
type Routine = Box<dyn Fn(&mut Player)>;

struct Entry {
    name: String,
    condition: Option<Condition>,
    routine: Routine,
}

/// Ordered list of guarded routines a player submits for a match.
///
/// Each turn the first entry whose condition holds for the live stats is
/// run once against a fresh [`Player`], and its log becomes the turn.
/// Later entries are never consulted, even if they would also match.
#[derive(Default)]
pub struct TurnScript {
    entries: Vec<Entry>,
}

impl TurnScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn when(
        mut self,
        name: impl Into<String>,
        condition: impl Fn(&Stats) -> bool + 'static,
        routine: impl Fn(&mut Player) + 'static,
    ) -> Self {
        self.entries.push(Entry {
            name: name.into(),
            condition: Some(Box::new(condition)),
            routine: Box::new(routine),
        });
        self
    }

    /// Adds an entry with no condition; it matches whenever it is reached.
    pub fn always(
        mut self,
        name: impl Into<String>,
        routine: impl Fn(&mut Player) + 'static,
    ) -> Self {
        self.entries.push(Entry {
            name: name.into(),
            condition: None,
            routine: Box::new(routine),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the entry that would run for `stats`.
    pub fn select(&self, stats: &Stats) -> Option<&str> {
        self.matching(stats).map(|entry| entry.name.as_str())
    }

    pub fn plan(&self, stats: Stats, slots: usize) -> TurnPlan {
        let Some(entry) = self.matching(&stats) else {
            debug!(target: "player_core.script", ?stats, "no entry matched, idling");
            return TurnPlan::idle(slots);
        };

        let mut player = Player::from_stats(stats);
        (entry.routine)(&mut player);
        debug!(
            target: "player_core.script",
            entry = entry.name.as_str(),
            recorded = player.log().len(),
            "script entry ran"
        );
        TurnPlan::from_player(&player, slots)
    }

    fn matching(&self, stats: &Stats) -> Option<&Entry> {
        self.entries.iter().find(|entry| {
            entry
                .condition
                .as_ref()
                .map_or(true, |condition| condition(stats))
        })
    }
}

impl fmt::Debug for TurnScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| entry.name.as_str()))
            .finish()
    }
}
