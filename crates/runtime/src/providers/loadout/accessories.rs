//! Accessory valuation.
//!
//! Accessories compete for three identical slots, so instead of ordered rules
//! each candidate gets a meat value and the best three are worn.
use agent_content::items;
use agent_core::{CapabilityPort, ItemId, WorldQuery};
use arrayvec::ArrayVec;

use super::EncounterContext;
use crate::providers::ranking::top_k_by;

/// Inputs a value function may consult besides the world.
#[derive(Clone, Copy, Debug)]
pub struct ValueContext<'a> {
    pub encounter: &'a EncounterContext,
    pub value_of_adventure: f64,
}

pub type ValueFn = fn(&dyn WorldQuery, &ValueContext<'_>) -> f64;

#[derive(Clone, Debug)]
pub struct AccessoryCandidate {
    pub item: ItemId,
    pub value: ValueFn,
}

impl AccessoryCandidate {
    pub const fn new(item: ItemId, value: ValueFn) -> Self {
        Self { item, value }
    }
}

pub fn standard_accessories() -> Vec<AccessoryCandidate> {
    vec![
        AccessoryCandidate::new(items::MAFIA_THUMB_RING, thumb_ring_value),
        AccessoryCandidate::new(items::LUCKY_GOLD_RING, lucky_gold_ring_value),
        AccessoryCandidate::new(items::SCREEGE_SPECTACLES, |_, _| 180.0),
        AccessoryCandidate::new(items::CHEENG_SPECTACLES, |_, _| 220.0),
    ]
}

/// Best `K` wearable candidates not already taken, highest value first.
pub fn rank_accessories<const K: usize>(
    world: &dyn WorldQuery,
    candidates: &[AccessoryCandidate],
    context: &ValueContext<'_>,
    taken: impl Fn(&ItemId) -> bool,
) -> ArrayVec<ItemId, K> {
    let wearable = candidates
        .iter()
        .filter(|candidate| world.can_wear(&candidate.item) && !taken(&candidate.item));

    top_k_by(wearable, K, |candidate| (candidate.value)(world, context))
        .into_iter()
        .map(|candidate| candidate.item.clone())
        .collect()
}

/// Extra turns from the ring, priced at the value of a turn.
pub fn thumb_ring_value(_: &dyn WorldQuery, context: &ValueContext<'_>) -> f64 {
    if context.encounter.free {
        return 0.0;
    }
    (1.0 / 0.96 - 1.0) * context.value_of_adventure
}

/// Expected payout per fight: one tenth of the average currency drop.
pub fn lucky_gold_ring_value(world: &dyn WorldQuery, _: &ValueContext<'_>) -> f64 {
    let held = |item: &ItemId| world.item_amount(item) > 0;
    let realm = |always: &str, today: &str| world.has_flag(always) || world.has_flag(today);

    let optional = [
        if held(&items::HOBO_NICKEL) { 100.0 } else { 0.0 },
        if held(&items::SAND_DOLLAR) {
            world.market_value(&items::SAND_DOLLAR) as f64
        } else {
            0.0
        },
        if held(&items::FREDDY_KRUEGERAND) {
            world.market_value(&items::FREDDY_KRUEGERAND) as f64
        } else {
            0.0
        },
        if realm("sleazeAirportAlways", "_sleazeAirportToday") {
            world.market_value(&items::BEACH_BUCK) as f64
        } else {
            0.0
        },
        if realm("spookyAirportAlways", "_spookyAirportToday") {
            world.market_value(&items::COINSPIRACY) as f64
        } else {
            0.0
        },
        if realm("stenchAirportAlways", "_stenchAirportToday") {
            world.market_value(&items::FUNFUNDS) as f64
        } else {
            0.0
        },
        if realm("hotAirportAlways", "_hotAirportToday")
            && !world.has_flag("_luckyGoldRingVolcoino")
        {
            world.market_value(&items::VOLCOINO) as f64
        } else {
            0.0
        },
        if realm("coldAirportAlways", "_coldAirportToday") {
            world.market_value(&items::WALMART_GIFT_CERTIFICATE) as f64
        } else {
            0.0
        },
        if realm("frAlways", "_frToday") {
            world.market_value(&items::RUBEE) as f64
        } else {
            0.0
        },
    ];

    let payouts: Vec<f64> = std::iter::once(100.0)
        .chain(optional.into_iter().filter(|value| *value > 0.0))
        .collect();
    payouts.iter().sum::<f64>() / payouts.len() as f64 / 10.0
}

#[cfg(test)]
mod tests {
    use agent_content::{default_catalog, locations};
    use agent_core::WorldSnapshot;

    use super::*;

    fn paid() -> EncounterContext {
        EncounterContext::new(locations::NOOB_CAVE, false)
    }

    #[test]
    fn thumb_ring_is_worthless_in_free_fights() {
        let world = WorldSnapshot::new();
        let free = EncounterContext::new(locations::NOOB_CAVE, true);
        let context = ValueContext {
            encounter: &free,
            value_of_adventure: 6_000.0,
        };
        assert_eq!(thumb_ring_value(&world, &context), 0.0);

        let encounter = paid();
        let context = ValueContext {
            encounter: &encounter,
            value_of_adventure: 6_000.0,
        };
        assert!((thumb_ring_value(&world, &context) - 250.0).abs() < 1e-6);
    }

    #[test]
    fn gold_ring_averages_available_currencies() {
        let encounter = paid();
        let context = ValueContext {
            encounter: &encounter,
            value_of_adventure: 0.0,
        };

        let bare = WorldSnapshot::new().with_catalog(default_catalog());
        assert!((lucky_gold_ring_value(&bare, &context) - 10.0).abs() < 1e-9);

        // 100 base, 100 nickel, 30 000 volcoino.
        let hot = bare
            .clone()
            .with_item(items::HOBO_NICKEL, 3)
            .with_flag("hotAirportAlways");
        assert!((lucky_gold_ring_value(&hot, &context) - 1_006.666_666).abs() < 1e-3);

        let claimed = hot.with_flag("_luckyGoldRingVolcoino");
        assert!((lucky_gold_ring_value(&claimed, &context) - 10.0).abs() < 1e-9);
    }

    fn ten(_: &dyn WorldQuery, _: &ValueContext<'_>) -> f64 {
        10.0
    }
    fn thirty(_: &dyn WorldQuery, _: &ValueContext<'_>) -> f64 {
        30.0
    }
    fn five(_: &dyn WorldQuery, _: &ValueContext<'_>) -> f64 {
        5.0
    }

    #[test]
    fn ranking_keeps_declaration_order_on_ties() {
        let names = ["W", "P", "Q", "Z"];
        let mut world = WorldSnapshot::new();
        for name in names {
            world = world
                .with_item(ItemId::new(name), 1)
                .with_item_info(
                    ItemId::new(name),
                    agent_core::ItemInfo::new(agent_core::ItemType::Accessory, 0),
                );
        }
        let candidates = [
            AccessoryCandidate::new(ItemId::new("W"), ten),
            AccessoryCandidate::new(ItemId::new("P"), thirty),
            AccessoryCandidate::new(ItemId::new("Q"), thirty),
            AccessoryCandidate::new(ItemId::new("Z"), five),
        ];
        let encounter = paid();
        let context = ValueContext {
            encounter: &encounter,
            value_of_adventure: 0.0,
        };

        let ranked = rank_accessories::<3>(&world, &candidates, &context, |_| false);

        assert_eq!(
            ranked.as_slice(),
            [ItemId::new("P"), ItemId::new("Q"), ItemId::new("W")]
        );
    }
}
