//! The loadout optimizer.
use agent_content::{Island, island, items};
use agent_core::{
    AgentConfig, AgentError, CapabilityPort, Entity, ItemId, MonsterId, Result, Slot, WorldQuery,
};
use arrayvec::ArrayVec;
use tracing::debug;

use super::accessories::{
    AccessoryCandidate, ValueContext, rank_accessories, standard_accessories,
};
use super::companion::{
    CompanionOptions, CompanionPolicy, CompanionSelector, ValueRankedCompanions,
};
use super::rules::{SlotRule, quest_rules};
use super::{EncounterContext, LoadoutSpec};

/// Modifier used when the task asks for none.
pub const DEFAULT_MODIFIER: &str = "Familiar Weight";

/// Two carriers that cannot be worn together; the superior one wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarrierPair {
    pub superior: ItemId,
    pub inferior: ItemId,
    /// Slot the inferior carrier goes in.
    pub inferior_slot: Slot,
}

impl Default for CarrierPair {
    fn default() -> Self {
        Self {
            superior: items::BUDDY_BJORN,
            inferior: items::CROWN_OF_THRONES,
            inferior_slot: Slot::Hat,
        }
    }
}

/// Computes equipment and a companion for an encounter.
pub struct LoadoutOptimizer {
    rules: Vec<SlotRule>,
    accessories: Vec<AccessoryCandidate>,
    companions: CompanionSelector,
    carriers: CarrierPair,
    value_of_adventure: f64,
    island: &'static Island,
    orb_target: MonsterId,
}

impl LoadoutOptimizer {
    /// Optimizer with the built-in rules and companion policy.
    pub fn standard(config: &AgentConfig) -> Self {
        Self::builder(config).build()
    }

    pub fn builder(config: &AgentConfig) -> LoadoutOptimizerBuilder {
        LoadoutOptimizerBuilder::new(config)
    }

    pub fn island(&self) -> &'static Island {
        self.island
    }

    /// Opponent the crystal orb should keep predicted.
    pub fn orb_target(&self) -> &MonsterId {
        &self.orb_target
    }

    pub fn companions(&self) -> &CompanionSelector {
        &self.companions
    }

    /// Loadout for an ordinary encounter.
    ///
    /// Whatever `overrides` pins is kept verbatim; it must be owned and
    /// wearable. Remaining slots are filled by the ordered rules, the carrier
    /// pair and the accessory ranking.
    pub fn optimize(
        &self,
        world: &dyn WorldQuery,
        encounter: &EncounterContext,
        overrides: LoadoutSpec,
    ) -> Result<LoadoutSpec> {
        validate_overrides(world, &overrides)?;
        let mut spec = overrides;

        // A pinned famequip leaves no room for the companion's own gear.
        let options = CompanionOptions {
            location: encounter.location.clone(),
            allow_equipment: spec.is_open(Slot::Famequip),
            allow_attack: true,
        };
        if spec.companion.is_none() {
            spec.companion = self.companions.choose(world, &options);
        }
        let companion_gear = spec
            .companion
            .as_ref()
            .and_then(|companion| self.companions.equipment_for(world, companion, &options));
        if let Some(item) = companion_gear {
            spec.slots.insert(Slot::Famequip, item);
        }

        self.apply_rules(world, encounter, &mut spec);
        self.apply_carriers(world, &mut spec);
        self.fill_accessories(world, encounter, &mut spec);

        if spec.modifiers.is_empty() {
            spec.modifiers.push(DEFAULT_MODIFIER.to_owned());
        }

        debug!(
            target: "runtime::loadout",
            location = %encounter.location,
            free = encounter.free,
            slots = spec.slots.len(),
            companion = spec.companion.as_ref().map(|c| c.as_str()),
            "loadout computed"
        );
        Ok(spec)
    }

    pub(super) fn apply_rules(
        &self,
        world: &dyn WorldQuery,
        encounter: &EncounterContext,
        spec: &mut LoadoutSpec,
    ) {
        for rule in &self.rules {
            if !spec.is_open(rule.slot)
                || spec.avoid.contains(&rule.item)
                || spec.wears(&rule.item)
                || !world.can_wear(&rule.item)
                || !rule.holds(world, encounter)
            {
                continue;
            }
            debug!(target: "runtime::loadout", slot = %rule.slot, item = %rule.item, "slot assigned");
            spec.slots.insert(rule.slot, rule.item.clone());
        }
    }

    /// Keeps at most one of the carrier pair on.
    pub(super) fn apply_carriers(&self, world: &dyn WorldQuery, spec: &mut LoadoutSpec) {
        let CarrierPair {
            superior,
            inferior,
            inferior_slot,
        } = &self.carriers;

        if world.has_item(superior) {
            spec.take_off(inferior);
            spec.avoid.insert(inferior.clone());
        } else if world.can_wear(inferior)
            && spec.is_open(*inferior_slot)
            && !spec.avoid.contains(inferior)
        {
            spec.slots.insert(*inferior_slot, inferior.clone());
        } else {
            spec.avoid.insert(inferior.clone());
        }
    }

    pub(super) fn fill_accessories(
        &self,
        world: &dyn WorldQuery,
        encounter: &EncounterContext,
        spec: &mut LoadoutSpec,
    ) {
        let open: ArrayVec<Slot, 3> = Slot::ACCESSORIES
            .into_iter()
            .filter(|slot| spec.is_open(*slot))
            .collect();
        if open.is_empty() {
            return;
        }

        let context = ValueContext {
            encounter,
            value_of_adventure: self.value_of_adventure,
        };
        let ranked = rank_accessories::<3>(world, &self.accessories, &context, |item| {
            spec.wears(item) || spec.avoid.contains(item)
        });

        for (slot, item) in open.into_iter().zip(ranked) {
            debug!(target: "runtime::loadout", slot = %slot, item = %item, "accessory assigned");
            spec.slots.insert(slot, item);
        }
    }
}

pub(super) fn validate_overrides(world: &dyn WorldQuery, overrides: &LoadoutSpec) -> Result<()> {
    for (slot, item) in &overrides.slots {
        if !world.can_wear(item) {
            return Err(AgentError::unavailable(
                Entity::Item(item.clone()),
                format!("{slot} override"),
            ));
        }
    }
    if let Some(companion) = &overrides.companion {
        if !world.has_companion(companion) {
            return Err(AgentError::unavailable(
                Entity::Companion(companion.clone()),
                "companion override",
            ));
        }
    }
    Ok(())
}

/// Builder for [`LoadoutOptimizer`].
pub struct LoadoutOptimizerBuilder {
    rules: Vec<SlotRule>,
    accessories: Vec<AccessoryCandidate>,
    policy: Box<dyn CompanionPolicy>,
    carriers: CarrierPair,
    shrub: bool,
    value_of_adventure: f64,
    island: &'static Island,
    orb_target: Option<MonsterId>,
}

impl LoadoutOptimizerBuilder {
    fn new(config: &AgentConfig) -> Self {
        Self {
            rules: quest_rules(),
            accessories: standard_accessories(),
            policy: Box::new(ValueRankedCompanions::standard()),
            carriers: CarrierPair::default(),
            shrub: config.shrub,
            value_of_adventure: config.value_of_adventure,
            island: island(config.island.as_deref()),
            orb_target: config.orb_target.clone().map(MonsterId::owned),
        }
    }

    pub fn rules(mut self, rules: Vec<SlotRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn accessories(mut self, accessories: Vec<AccessoryCandidate>) -> Self {
        self.accessories = accessories;
        self
    }

    pub fn companion_policy(mut self, policy: impl CompanionPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn carriers(mut self, carriers: CarrierPair) -> Self {
        self.carriers = carriers;
        self
    }

    pub fn build(self) -> LoadoutOptimizer {
        LoadoutOptimizer {
            rules: self.rules,
            accessories: self.accessories,
            companions: CompanionSelector::new(self.shrub, self.policy),
            carriers: self.carriers,
            value_of_adventure: self.value_of_adventure,
            orb_target: self
                .orb_target
                .unwrap_or_else(|| self.island.orb_target.clone()),
            island: self.island,
        }
    }
}

#[cfg(test)]
mod tests {
    use agent_content::{companions, default_catalog, locations};
    use agent_core::{ErrorSeverity, WorldSnapshot};

    use super::*;

    fn world() -> WorldSnapshot {
        WorldSnapshot::new().with_catalog(default_catalog())
    }

    fn paid() -> EncounterContext {
        EncounterContext::new(locations::NOOB_CAVE, false)
    }

    fn optimizer() -> LoadoutOptimizer {
        LoadoutOptimizer::standard(&AgentConfig::default())
    }

    #[test]
    fn overrides_are_kept_verbatim() {
        let world = world()
            .with_item(items::JUNE_CLEAVER, 1)
            .with_item(items::COSPLAY_SABER, 1);
        let overrides = LoadoutSpec::new().with_slot(Slot::Weapon, items::COSPLAY_SABER);

        let spec = optimizer().optimize(&world, &paid(), overrides).unwrap();

        assert_eq!(spec.get(Slot::Weapon), Some(&items::COSPLAY_SABER));
        assert_eq!(spec.modifiers, [DEFAULT_MODIFIER]);
    }

    #[test]
    fn unowned_override_is_rejected() {
        let overrides = LoadoutSpec::new().with_slot(Slot::Back, items::PROTON_PACK);

        let err = optimizer().optimize(&world(), &paid(), overrides).unwrap_err();

        assert!(matches!(err, AgentError::ResourceUnavailable { .. }));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn superior_carrier_excludes_inferior() {
        let world = world()
            .with_item(items::BUDDY_BJORN, 1)
            .with_item(items::CROWN_OF_THRONES, 1);
        let overrides = LoadoutSpec::new().with_slot(Slot::Hat, items::CROWN_OF_THRONES);

        let spec = optimizer().optimize(&world, &paid(), overrides).unwrap();

        assert!(!spec.wears(&items::CROWN_OF_THRONES));
        assert!(spec.avoid.contains(&items::CROWN_OF_THRONES));
        assert_eq!(spec.get(Slot::Back), Some(&items::BUDDY_BJORN));
    }

    #[test]
    fn inferior_carrier_fills_open_hat() {
        let world = world().with_item(items::CROWN_OF_THRONES, 1);

        let spec = optimizer().optimize(&world, &paid(), LoadoutSpec::new()).unwrap();

        assert_eq!(spec.get(Slot::Hat), Some(&items::CROWN_OF_THRONES));
        assert!(!spec.avoid.contains(&items::CROWN_OF_THRONES));
    }

    #[test]
    fn missing_carriers_are_avoided() {
        let spec = optimizer()
            .optimize(&world(), &paid(), LoadoutSpec::new())
            .unwrap();

        assert!(spec.avoid.contains(&items::CROWN_OF_THRONES));
        assert!(spec.slots.is_empty());
    }

    #[test]
    fn pinned_accessory_is_not_doubled() {
        let world = world()
            .with_item(items::MAFIA_THUMB_RING, 1)
            .with_item(items::CHEENG_SPECTACLES, 1)
            .with_item(items::VOTED_STICKER, 1);
        let overrides = LoadoutSpec::new().with_slot(Slot::Acc3, items::VOTED_STICKER);

        let spec = optimizer().optimize(&world, &paid(), overrides).unwrap();

        assert_eq!(spec.get(Slot::Acc1), Some(&items::MAFIA_THUMB_RING));
        assert_eq!(spec.get(Slot::Acc2), Some(&items::CHEENG_SPECTACLES));
        assert_eq!(spec.get(Slot::Acc3), Some(&items::VOTED_STICKER));
    }

    #[test]
    fn companion_gear_follows_companion() {
        let world = world()
            .with_companion(companions::SHORTER_ORDER_COOK)
            .with_item(items::BLUE_PLATE, 1)
            .with_item(items::TINY_STILLSUIT, 1);

        let spec = optimizer().optimize(&world, &paid(), LoadoutSpec::new()).unwrap();

        assert_eq!(spec.companion, Some(companions::SHORTER_ORDER_COOK));
        assert_eq!(spec.get(Slot::Famequip), Some(&items::BLUE_PLATE));
    }

    #[test]
    fn pinned_famequip_rules_out_geared_companions() {
        let world = world()
            .with_flag("canInteract")
            .with_companion(companions::REAGNIMATED_GNOME)
            .with_companion(companions::GREY_GOOSE)
            .with_item(items::GNOMISH_KGNEE, 1)
            .with_item(items::CRYSTAL_BALL, 1);

        let open = optimizer().optimize(&world, &paid(), LoadoutSpec::new()).unwrap();
        assert_eq!(open.companion, Some(companions::REAGNIMATED_GNOME));
        assert_eq!(open.get(Slot::Famequip), Some(&items::GNOMISH_KGNEE));

        let overrides = LoadoutSpec::new().with_slot(Slot::Famequip, items::CRYSTAL_BALL);
        let pinned = optimizer().optimize(&world, &paid(), overrides).unwrap();
        assert_eq!(pinned.companion, Some(companions::GREY_GOOSE));
        assert_eq!(pinned.get(Slot::Famequip), Some(&items::CRYSTAL_BALL));
    }
}
