//! Target selection with forced-repeat memory.
use std::cell::RefCell;
use std::collections::BTreeMap;

use agent_content::locations;
use agent_core::{AgentConfig, AgentError, LocationId, WorldQuery};
use tracing::{debug, warn};

use super::{Candidate, WandererCategory, standard_candidates};
use crate::api::ChoiceMap;
use crate::providers::ranking::stable_max_by;

#[derive(Clone, Debug, PartialEq, Eq)]
struct ForcedRepeat {
    location: LocationId,
    countdown: String,
    choices: ChoiceMap,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Selection {
    location: LocationId,
    choices: ChoiceMap,
}

/// Chooses where to meet wanderers.
///
/// Selection is a pure function of the world except for one piece of memory:
/// once a candidate with a repeat countdown is picked (or a task forces a
/// repeat), later selections for the same category return that location until
/// the countdown stops running.
pub struct WandererSelector {
    candidates: Vec<Candidate>,
    default: LocationId,
    forced: RefCell<BTreeMap<WandererCategory, ForcedRepeat>>,
}

impl WandererSelector {
    pub fn new(candidates: Vec<Candidate>, default: LocationId) -> Self {
        Self {
            candidates,
            default,
            forced: RefCell::new(BTreeMap::new()),
        }
    }

    /// Selector over the built-in candidates, defaulting to the starter cave.
    pub fn standard(config: &AgentConfig) -> Self {
        Self::new(standard_candidates(config), locations::NOOB_CAVE)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn default_target(&self) -> &LocationId {
        &self.default
    }

    /// Location to look for a `category` encounter at.
    pub fn get_target(&self, world: &dyn WorldQuery, category: WandererCategory) -> LocationId {
        self.select(world, category).location
    }

    /// Choice decisions that go with [`Self::get_target`].
    pub fn get_choices(&self, world: &dyn WorldQuery, category: WandererCategory) -> ChoiceMap {
        self.select(world, category).choices
    }

    /// Pins `category` to `location` while `countdown` keeps running.
    pub fn force_repeat(
        &self,
        category: WandererCategory,
        location: LocationId,
        countdown: impl Into<String>,
    ) {
        let choices = self
            .candidates
            .iter()
            .find(|candidate| candidate.location == location)
            .map(|candidate| candidate.choices.clone())
            .unwrap_or_default();
        self.forced.borrow_mut().insert(
            category,
            ForcedRepeat {
                location,
                countdown: countdown.into(),
                choices,
            },
        );
    }

    fn select(&self, world: &dyn WorldQuery, category: WandererCategory) -> Selection {
        if let Some(selection) = self.forced_selection(world, category) {
            return selection;
        }

        let eligible = self
            .candidates
            .iter()
            .filter(|candidate| candidate.is_eligible(world, category));
        let best = stable_max_by(eligible, |candidate| {
            (candidate.value)(world, &candidate.location)
        });

        let Some(best) = best else {
            let err = AgentError::AmbiguousTarget {
                category: category.to_string(),
            };
            warn!(
                target: "runtime::wanderer",
                error = %err,
                severity = err.severity().as_str(),
                default = %self.default,
                "falling back to default target"
            );
            return Selection {
                location: self.default.clone(),
                choices: ChoiceMap::new(),
            };
        };

        if let Some(countdown) = best.repeat_countdown {
            self.forced.borrow_mut().insert(
                category,
                ForcedRepeat {
                    location: best.location.clone(),
                    countdown: countdown.to_owned(),
                    choices: best.choices.clone(),
                },
            );
        }

        debug!(
            target: "runtime::wanderer",
            category = %category,
            candidate = best.name,
            location = %best.location,
            "target selected"
        );
        Selection {
            location: best.location.clone(),
            choices: best.choices.clone(),
        }
    }

    /// Remembered location for `category`, dropped once its countdown ends.
    fn forced_selection(
        &self,
        world: &dyn WorldQuery,
        category: WandererCategory,
    ) -> Option<Selection> {
        let mut forced = self.forced.borrow_mut();
        let repeat = forced.get(&category)?;

        if world.countdown(&repeat.countdown).is_some_and(|turns| turns > 0) {
            debug!(
                target: "runtime::wanderer",
                category = %category,
                location = %repeat.location,
                countdown = %repeat.countdown,
                "forced repeat"
            );
            return Some(Selection {
                location: repeat.location.clone(),
                choices: repeat.choices.clone(),
            });
        }

        forced.remove(&category);
        None
    }
}
