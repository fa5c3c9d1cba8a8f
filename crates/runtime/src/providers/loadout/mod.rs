//! Equipment and companion selection.
//!
//! A task hands the optimizer the slots it insists on; the optimizer keeps
//! those verbatim and fills the rest in this order:
//!
//! 1. Companion: fixed preferences, then a [`CompanionPolicy`]
//! 2. Companion equipment, when the chosen companion has its own
//! 3. Ordered [`SlotRule`]s, first applicable item per slot
//! 4. The [`CarrierPair`] exclusion
//! 5. The three accessory slots by meat value
//!
//! Every choice is deterministic: ties break by declaration order.
mod accessories;
mod companion;
mod island;
mod optimizer;
mod rules;
mod spec;

pub use accessories::{
    AccessoryCandidate, ValueContext, ValueFn, lucky_gold_ring_value, rank_accessories,
    standard_accessories, thumb_ring_value,
};
pub use companion::{
    CompanionEntry, CompanionOptions, CompanionPolicy, CompanionSelector, ValueRankedCompanions,
    shrub_gift_pending, time_to_meatify,
};
pub use island::{IslandFight, orb_prediction, orb_worthwhile};
pub use optimizer::{CarrierPair, DEFAULT_MODIFIER, LoadoutOptimizer, LoadoutOptimizerBuilder};
pub use rules::{RuleCondition, SlotRule, companion_equipment, quest_rules};
pub use spec::{EncounterContext, LoadoutSpec};
