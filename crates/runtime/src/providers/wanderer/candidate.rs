//! Wanderer candidates.
use agent_core::{LocationId, WorldQuery};

use crate::api::ChoiceMap;

/// Kind of encounter a caller wants a location for.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WandererCategory {
    /// Any wandering opponent.
    Wanderer,
    /// A copied opponent brought back by a backup.
    Backup,
    /// An opponent about to be hit with a yellow ray.
    YellowRay,
    /// An opponent that costs no turn.
    FreeFight,
    /// An opponent the actor will run from.
    FreeRun,
}

pub type BudgetFn = fn(&dyn WorldQuery) -> i64;
pub type GateFn = fn(&dyn WorldQuery) -> bool;
pub type TargetValueFn = fn(&dyn WorldQuery, &LocationId) -> f64;

/// A location wanderers can be met at.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub name: &'static str,
    pub categories: Vec<WandererCategory>,
    pub location: LocationId,
    /// Turns the location can still absorb today.
    pub budget: BudgetFn,
    /// Whether the location is reachable at all.
    pub gate: GateFn,
    /// Expected meat per encounter.
    pub value: TargetValueFn,
    /// Countdown that, while running, pins later selections to this location.
    pub repeat_countdown: Option<&'static str>,
    /// Decisions for choice adventures met at the location.
    pub choices: ChoiceMap,
}

impl Candidate {
    /// Candidate reachable without conditions, valued by its drops.
    pub fn new(name: &'static str, location: LocationId) -> Self {
        Self {
            name,
            categories: vec![WandererCategory::Wanderer],
            location,
            budget: |_| i64::MAX,
            gate: |_| true,
            value: location_drop_value,
            repeat_countdown: None,
            choices: ChoiceMap::new(),
        }
    }

    pub fn categories(mut self, categories: &[WandererCategory]) -> Self {
        self.categories = categories.to_vec();
        self
    }

    pub fn budget(mut self, budget: BudgetFn) -> Self {
        self.budget = budget;
        self
    }

    pub fn gate(mut self, gate: GateFn) -> Self {
        self.gate = gate;
        self
    }

    pub fn value(mut self, value: TargetValueFn) -> Self {
        self.value = value;
        self
    }

    pub fn repeat_while(mut self, countdown: &'static str) -> Self {
        self.repeat_countdown = Some(countdown);
        self
    }

    pub fn choice(mut self, choice: u32, decision: u32) -> Self {
        self.choices.insert(choice, decision);
        self
    }

    pub fn serves(&self, category: WandererCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Serves `category`, is reachable and has budget left.
    pub fn is_eligible(&self, world: &dyn WorldQuery, category: WandererCategory) -> bool {
        self.serves(category) && (self.gate)(world) && (self.budget)(world) > 0
    }
}

/// Average meat value of one opponent's drops at `location`.
pub fn location_drop_value(world: &dyn WorldQuery, location: &LocationId) -> f64 {
    let monsters = world.entities_at(location);
    if monsters.is_empty() {
        return 0.0;
    }

    let total: f64 = monsters
        .iter()
        .filter_map(|monster| world.monster(monster))
        .map(|info| {
            info.drops
                .iter()
                .map(|drop| drop.rate * world.market_value(&drop.item) as f64)
                .sum::<f64>()
        })
        .sum();
    total / monsters.len() as f64
}

#[cfg(test)]
mod tests {
    use agent_core::{
        ItemDrop, ItemId, ItemInfo, ItemType, LocationInfo, MonsterId, MonsterInfo, WorldSnapshot,
    };

    use super::*;

    #[test]
    fn drop_value_averages_over_residents() {
        let gem = ItemId::new("gem");
        let location = LocationId::new("mine");
        let world = WorldSnapshot::new()
            .with_item_info(gem.clone(), ItemInfo::new(ItemType::Other, 1_000))
            .with_monster(
                MonsterId::new("miner"),
                MonsterInfo {
                    drops: vec![ItemDrop {
                        item: gem,
                        rate: 0.5,
                    }],
                    ..MonsterInfo::default()
                },
            )
            .with_monster(MonsterId::new("rock"), MonsterInfo::default())
            .with_location(
                location.clone(),
                LocationInfo {
                    zone: "Underground".to_owned(),
                    monsters: vec![MonsterId::new("miner"), MonsterId::new("rock")],
                },
            );

        assert!((location_drop_value(&world, &location) - 250.0).abs() < 1e-9);
        assert_eq!(location_drop_value(&world, &LocationId::new("void")), 0.0);
    }

    #[test]
    fn eligibility_needs_category_gate_and_budget() {
        let world = WorldSnapshot::new();
        let candidate = Candidate::new("cave", LocationId::new("cave"));

        assert!(candidate.is_eligible(&world, WandererCategory::Wanderer));
        assert!(!candidate.is_eligible(&world, WandererCategory::YellowRay));
        assert!(!candidate.clone().gate(|_| false).is_eligible(&world, WandererCategory::Wanderer));
        assert!(!candidate.budget(|_| 0).is_eligible(&world, WandererCategory::Wanderer));
    }
}
