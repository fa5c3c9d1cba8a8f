//! Encounter-target selection.
//!
//! Wandering opponents show up wherever the actor spends a turn, so the only
//! decision is where that turn is worth the most. [`WandererSelector`] picks
//! the highest-value eligible [`Candidate`] for a [`WandererCategory`], keeps
//! returning a location while its repeat countdown runs, and falls back to a
//! default location when nothing qualifies.
mod candidate;
mod registry;
mod selector;

pub use candidate::{
    BudgetFn, Candidate, GateFn, TargetValueFn, WandererCategory, location_drop_value,
};
pub use registry::{DIGITIZE_COUNTDOWN, standard_candidates};
pub use selector::WandererSelector;
