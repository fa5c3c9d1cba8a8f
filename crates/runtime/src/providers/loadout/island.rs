//! Island loadouts.
//!
//! Island fights trade the general rules for resistance to the island's
//! element and a few island-specific pieces.
use agent_content::{companions, items};
use agent_core::{CapabilityPort, ItemId, LocationId, MonsterId, Phylum, Result, Slot, WorldQuery};
use tracing::debug;

use super::companion::CompanionOptions;
use super::optimizer::validate_overrides;
use super::{LoadoutOptimizer, LoadoutSpec};

/// How an island fight is expected to end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum IslandFight {
    /// Ended by a free kill.
    FreeKill,
    /// Escaped from.
    FreeRun,
    /// Fought normally, costing a turn.
    Regular,
}

/// Opponent the crystal orb currently predicts at `location`.
///
/// Predictions are stored as `turn:location:monster` entries joined by `|`.
pub fn orb_prediction(world: &dyn WorldQuery, location: &LocationId) -> Option<MonsterId> {
    let predictions = world.property("crystalBallPredictions")?;
    predictions
        .split('|')
        .filter_map(|entry| {
            let mut parts = entry.splitn(3, ':');
            let _turn = parts.next()?;
            let place = parts.next()?;
            let monster = parts.next()?;
            (place == location.as_str()).then(|| MonsterId::owned(monster))
        })
        .next()
}

/// Whether the orb is worth wearing at `location` given the opponent we
/// want it to keep.
pub fn orb_worthwhile(world: &dyn WorldQuery, location: &LocationId, target: &MonsterId) -> bool {
    if !world.can_wear(&items::CRYSTAL_BALL) {
        return false;
    }
    match orb_prediction(world, location) {
        None => true,
        Some(predicted) => predicted == *target,
    }
}

impl LoadoutOptimizer {
    /// Loadout for a fight on the configured island.
    pub fn island_loadout(
        &self,
        world: &dyn WorldQuery,
        fight: IslandFight,
        overrides: LoadoutSpec,
    ) -> Result<LoadoutSpec> {
        validate_overrides(world, &overrides)?;
        let island = self.island();
        let location = &island.location;
        let mut spec = overrides;

        let orb = fight != IslandFight::FreeRun
            && spec.is_open(Slot::Famequip)
            && orb_worthwhile(world, location, self.orb_target());
        if orb {
            spec.slots.insert(Slot::Famequip, items::CRYSTAL_BALL);
        }

        let options = CompanionOptions {
            location: location.clone(),
            allow_equipment: !orb,
            allow_attack: fight == IslandFight::Regular,
        };
        if spec.companion.is_none() {
            spec.companion = self.companions().choose(world, &options);
        }

        let drunk = world.is_intoxicated();
        let pickpocket_gear =
            !world.character_class().can_pickpocket() && fight == IslandFight::Regular;
        let mut wear = |slot: Slot, item: &ItemId, wanted: bool| {
            if wanted && spec.is_open(slot) && !spec.wears(item) && world.can_wear(item) {
                spec.slots.insert(slot, item.clone());
            }
        };
        wear(Slot::Offhand, &items::DRUNKULA_WINEGLASS, drunk);
        wear(Slot::Offhand, &items::DEFT_PIRATE_HOOK, pickpocket_gear);
        wear(Slot::Offhand, &items::POTTED_PLANT, true);
        wear(Slot::Acc1, &items::MAFIA_THUMB_RING, fight == IslandFight::Regular);
        wear(Slot::Weapon, &items::JUNE_CLEAVER, true);
        let plants = world
            .entities_at(location)
            .iter()
            .filter_map(|monster| world.monster(monster))
            .any(|info| info.phylum == Phylum::Plant);
        wear(Slot::Pants, &items::TEARAWAY_PANTS, plants);

        if spec.modifiers.is_empty() {
            let resistance = format!("2 {} resistance 40 max", island.element);
            spec.modifiers.push(resistance);
            spec.modifiers.push("-combat".to_owned());
        }

        let weightless = [
            companions::PEACE_TURKEY,
            companions::TEMPORAL_RIFTLET,
            companions::REAGNIMATED_GNOME,
        ];
        let light_companion = spec
            .companion
            .as_ref()
            .is_some_and(|companion| weightless.contains(companion));
        if light_companion {
            spec.modifiers.push("0.01 Familiar Weight".to_owned());
        } else if spec.is_open(Slot::Famequip) && world.can_wear(&items::TINY_STILLSUIT) {
            spec.slots.insert(Slot::Famequip, items::TINY_STILLSUIT);
        }

        self.apply_carriers(world, &mut spec);

        debug!(
            target: "runtime::loadout",
            island = island.name,
            fight = %fight,
            orb,
            companion = spec.companion.as_ref().map(|c| c.as_str()),
            "island loadout computed"
        );
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use agent_content::{default_catalog, locations, monsters};
    use agent_core::{AgentConfig, Attribute, CharacterClass, WorldSnapshot};

    use super::*;

    fn reef() -> LoadoutOptimizer {
        LoadoutOptimizer::standard(&AgentConfig {
            island: Some("reef".to_owned()),
            ..AgentConfig::default()
        })
    }

    fn world() -> WorldSnapshot {
        WorldSnapshot::new()
            .with_catalog(default_catalog())
            .with_item(items::CRYSTAL_BALL, 1)
            .with_item(items::POTTED_PLANT, 1)
            .with_item(items::DEFT_PIRATE_HOOK, 1)
            .with_item(items::TEARAWAY_PANTS, 1)
    }

    #[test]
    fn parses_prediction_for_location() {
        let world = WorldSnapshot::new().with_property(
            "crystalBallPredictions",
            "12:The Smoldering Atoll:scorched elf|14:The Frozen Reef:frostbitten kelp",
        );

        assert_eq!(
            orb_prediction(&world, &locations::FROZEN_REEF),
            Some(MonsterId::owned("frostbitten kelp"))
        );
        assert_eq!(orb_prediction(&world, &locations::FESTERING_GROVE), None);
    }

    #[test]
    fn orb_kept_only_for_wanted_prediction() {
        let unwanted = world().with_property(
            "crystalBallPredictions",
            "3:The Frozen Reef:frostbitten kelp",
        );
        let spec = reef()
            .island_loadout(&unwanted, IslandFight::FreeKill, LoadoutSpec::new())
            .unwrap();
        assert_ne!(spec.get(Slot::Famequip), Some(&items::CRYSTAL_BALL));

        let wanted = world().with_property(
            "crystalBallPredictions",
            format!("3:The Frozen Reef:{}", monsters::ELF_GUARD_ENGINEER),
        );
        let spec = reef()
            .island_loadout(&wanted, IslandFight::FreeKill, LoadoutSpec::new())
            .unwrap();
        assert_eq!(spec.get(Slot::Famequip), Some(&items::CRYSTAL_BALL));
    }

    #[test]
    fn free_runs_skip_the_orb() {
        let spec = reef()
            .island_loadout(&world(), IslandFight::FreeRun, LoadoutSpec::new())
            .unwrap();
        assert_eq!(spec.get(Slot::Famequip), None);
    }

    #[test]
    fn regular_fights_pick_pockets_and_resist() {
        let spec = reef()
            .island_loadout(&world(), IslandFight::Regular, LoadoutSpec::new())
            .unwrap();

        assert_eq!(spec.get(Slot::Offhand), Some(&items::DEFT_PIRATE_HOOK));
        // The reef hosts a plant opponent.
        assert_eq!(spec.get(Slot::Pants), Some(&items::TEARAWAY_PANTS));
        assert_eq!(spec.modifiers[0], "2 cold resistance 40 max");
        assert_eq!(spec.modifiers[1], "-combat");
    }

    #[test]
    fn thieves_and_drunks_use_other_offhands() {
        let thief = world().with_class(CharacterClass::DiscoBandit);
        let spec = reef()
            .island_loadout(&thief, IslandFight::Regular, LoadoutSpec::new())
            .unwrap();
        assert_eq!(spec.get(Slot::Offhand), Some(&items::POTTED_PLANT));

        let drunk = world()
            .with_item(items::DRUNKULA_WINEGLASS, 1)
            .with_attribute(Attribute::Inebriety, 20)
            .with_attribute(Attribute::InebrietyLimit, 15);
        let spec = reef()
            .island_loadout(&drunk, IslandFight::Regular, LoadoutSpec::new())
            .unwrap();
        assert_eq!(spec.get(Slot::Offhand), Some(&items::DRUNKULA_WINEGLASS));
    }
}
