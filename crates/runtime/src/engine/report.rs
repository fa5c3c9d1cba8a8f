//! Stop conditions and the end-of-run report.
use std::collections::BTreeMap;
use std::fmt;

use agent_core::{Attribute, ItemId, Sobriety, TurnBudget, WorldQuery};

/// When the run loop stops, fixed at the start of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StopCondition {
    budget: TurnBudget,
    start_turn: i64,
}

impl StopCondition {
    pub fn new(budget: TurnBudget, world: &dyn WorldQuery) -> Self {
        Self {
            budget,
            start_turn: world.attribute(Attribute::Turncount),
        }
    }

    pub fn reached(&self, world: &dyn WorldQuery) -> Option<StopReason> {
        let adventures = world.attribute(Attribute::Adventures);
        match self.budget {
            TurnBudget::Play(turns) => {
                if world.attribute(Attribute::Turncount) - self.start_turn >= turns {
                    Some(StopReason::TurnsPlayed(turns))
                } else if adventures <= 0 {
                    Some(StopReason::OutOfAdventures)
                } else {
                    None
                }
            }
            TurnBudget::Reserve(reserve) => {
                (adventures <= reserve).then_some(StopReason::ReserveReached(reserve))
            }
        }
    }
}

/// Why a run ended without an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    TurnsPlayed(i64),
    OutOfAdventures,
    ReserveReached(i64),
    QuestsCompleted,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::TurnsPlayed(turns) => write!(f, "played {turns} turns"),
            StopReason::OutOfAdventures => f.write_str("out of adventures"),
            StopReason::ReserveReached(reserve) => write!(f, "{reserve} adventures left in reserve"),
            StopReason::QuestsCompleted => f.write_str("all quests completed"),
        }
    }
}

/// Summary of a finished run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub cycles: u64,
    /// Executions per task name.
    pub executions: BTreeMap<String, u64>,
    pub stop: Option<StopReason>,
    /// Item count changes over the session.
    pub inventory_diff: BTreeMap<ItemId, i64>,
}

impl RunReport {
    pub(crate) fn record(&mut self, task: &str) {
        self.cycles += 1;
        *self.executions.entry(task.to_owned()).or_insert(0) += 1;
    }

    /// Fills the inventory diff, dropping items whose count did not change.
    pub(crate) fn close(
        &mut self,
        stop: StopReason,
        before: &BTreeMap<ItemId, u32>,
        after: &BTreeMap<ItemId, u32>,
    ) {
        self.stop = Some(stop);
        self.inventory_diff = inventory_diff(before, after);
    }
}

fn inventory_diff(
    before: &BTreeMap<ItemId, u32>,
    after: &BTreeMap<ItemId, u32>,
) -> BTreeMap<ItemId, i64> {
    before
        .keys()
        .chain(after.keys())
        .filter_map(|item| {
            let was = i64::from(before.get(item).copied().unwrap_or(0));
            let now = i64::from(after.get(item).copied().unwrap_or(0));
            (was != now).then(|| (item.clone(), now - was))
        })
        .collect()
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cycles: {}", self.cycles)?;
        if let Some(stop) = self.stop {
            writeln!(f, "stopped: {stop}")?;
        }
        for (task, count) in &self.executions {
            writeln!(f, "  {task}: {count}")?;
        }
        if self.inventory_diff.is_empty() {
            return writeln!(f, "no items gained or lost");
        }
        writeln!(f, "session results:")?;
        for (item, delta) in &self.inventory_diff {
            writeln!(f, "  {delta:+} {item}")?;
        }
        Ok(())
    }
}

/// Per-task state as seen by [`crate::Engine::describe`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskStatus {
    pub quest: String,
    pub task: String,
    pub ready: bool,
    pub completed: bool,
    pub sobriety: Sobriety,
    pub admissible: bool,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.completed {
            "done"
        } else if self.admissible {
            "next"
        } else if self.ready {
            "blocked"
        } else {
            "waiting"
        };
        write!(
            f,
            "[{state:>7}] {} / {} ({})",
            self.quest, self.task, self.sobriety
        )
    }
}

#[cfg(test)]
mod tests {
    use agent_core::WorldSnapshot;

    use super::*;

    #[test]
    fn play_budget_counts_from_start() {
        let mut world = WorldSnapshot::new()
            .with_attribute(Attribute::Turncount, 100)
            .with_attribute(Attribute::Adventures, 50);
        let stop = StopCondition::new(TurnBudget::Play(2), &world);
        assert_eq!(stop.reached(&world), None);

        world.advance_turn();
        world.advance_turn();
        assert_eq!(stop.reached(&world), Some(StopReason::TurnsPlayed(2)));
    }

    #[test]
    fn play_budget_stops_without_adventures() {
        let world = WorldSnapshot::new();
        let stop = StopCondition::new(TurnBudget::Play(10), &world);
        assert_eq!(stop.reached(&world), Some(StopReason::OutOfAdventures));
    }

    #[test]
    fn reserve_keeps_turns() {
        let world = WorldSnapshot::new().with_attribute(Attribute::Adventures, 20);
        assert_eq!(
            StopCondition::new(TurnBudget::Reserve(20), &world).reached(&world),
            Some(StopReason::ReserveReached(20))
        );
        assert_eq!(
            StopCondition::new(TurnBudget::Reserve(19), &world).reached(&world),
            None
        );
    }

    #[test]
    fn diff_skips_unchanged_items() {
        let gem = ItemId::new("gem");
        let rock = ItemId::new("rock");
        let coin = ItemId::new("coin");
        let before = BTreeMap::from([(gem.clone(), 1), (rock.clone(), 4)]);
        let after = BTreeMap::from([(rock, 4), (coin.clone(), 3)]);

        let diff = inventory_diff(&before, &after);
        assert_eq!(diff, BTreeMap::from([(gem, -1), (coin, 3)]));
    }
}
