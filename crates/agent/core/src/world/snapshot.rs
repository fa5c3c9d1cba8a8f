//! In-memory world state.
//!
//! [`WorldSnapshot`] answers every [`WorldQuery`] from plain maps. It is what
//! the dry-run host mutates and what tests build with the `with_*` methods.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    Attribute, Catalog, CharacterClass, CompanionId, EffectId, Entity, ItemId, ItemInfo, ItemType,
    LocationId, LocationInfo, MonsterId, MonsterInfo, SkillId, Slot, WorldQuery,
};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldSnapshot {
    pub class: CharacterClass,
    pub attributes: BTreeMap<Attribute, i64>,
    pub inventory: BTreeMap<ItemId, u32>,
    pub equipment: BTreeMap<Slot, ItemId>,
    pub skills: BTreeSet<SkillId>,
    /// Companions the actor owns.
    pub companions: BTreeSet<CompanionId>,
    /// Companion currently active.
    pub companion: Option<CompanionId>,
    /// Active effects and their remaining turns.
    pub effects: BTreeMap<EffectId, u32>,
    pub counters: BTreeMap<String, i64>,
    pub countdowns: BTreeMap<String, i64>,
    pub properties: BTreeMap<String, String>,
    pub flags: BTreeSet<String>,
    /// Items whose wear requirements the actor does not meet.
    pub unequippable: BTreeSet<ItemId>,
    pub catalog: Catalog,
}

impl WorldSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: CharacterClass) -> Self {
        self.class = class;
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute, value: i64) -> Self {
        self.attributes.insert(attribute, value);
        self
    }

    pub fn with_item(mut self, item: ItemId, amount: u32) -> Self {
        self.inventory.insert(item, amount);
        self
    }

    pub fn with_equipped(mut self, slot: Slot, item: ItemId) -> Self {
        self.equipment.insert(slot, item);
        self
    }

    pub fn with_skill(mut self, skill: SkillId) -> Self {
        self.skills.insert(skill);
        self
    }

    pub fn with_companion(mut self, companion: CompanionId) -> Self {
        self.companions.insert(companion);
        self
    }

    pub fn with_active_companion(mut self, companion: CompanionId) -> Self {
        self.companions.insert(companion.clone());
        self.companion = Some(companion);
        self
    }

    pub fn with_effect(mut self, effect: EffectId, turns: u32) -> Self {
        self.effects.insert(effect, turns);
        self
    }

    pub fn with_counter(mut self, name: impl Into<String>, value: i64) -> Self {
        self.counters.insert(name.into(), value);
        self
    }

    pub fn with_countdown(mut self, name: impl Into<String>, turns: i64) -> Self {
        self.countdowns.insert(name.into(), turns);
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.insert(flag.into());
        self
    }

    pub fn with_unequippable(mut self, item: ItemId) -> Self {
        self.unequippable.insert(item);
        self
    }

    pub fn with_item_info(mut self, item: ItemId, info: ItemInfo) -> Self {
        self.catalog.items.insert(item, info);
        self
    }

    pub fn with_monster(mut self, monster: MonsterId, info: MonsterInfo) -> Self {
        self.catalog.monsters.insert(monster, info);
        self
    }

    pub fn with_location(mut self, location: LocationId, info: LocationInfo) -> Self {
        self.catalog.locations.insert(location, info);
        self
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Adds `delta` copies of `item`, removing the entry when it reaches zero.
    pub fn adjust_item(&mut self, item: &ItemId, delta: i64) {
        let current = i64::from(self.inventory.get(item).copied().unwrap_or(0));
        let next = (current + delta).max(0);
        if next == 0 {
            self.inventory.remove(item);
        } else {
            self.inventory
                .insert(item.clone(), u32::try_from(next).unwrap_or(u32::MAX));
        }
    }

    pub fn set_attribute(&mut self, attribute: Attribute, value: i64) {
        self.attributes.insert(attribute, value);
    }

    pub fn adjust_attribute(&mut self, attribute: Attribute, delta: i64) {
        *self.attributes.entry(attribute).or_insert(0) += delta;
    }

    pub fn set_counter(&mut self, name: &str, value: i64) {
        self.counters.insert(name.to_owned(), value);
    }

    pub fn add_effect(&mut self, effect: EffectId, turns: u32) {
        *self.effects.entry(effect).or_insert(0) += turns;
    }

    /// Ticks every countdown and effect by one turn. Effects that run out are
    /// removed; countdowns stop at zero.
    pub fn advance_turn(&mut self) {
        self.adjust_attribute(Attribute::Turncount, 1);
        self.adjust_attribute(Attribute::TurnsPlayed, 1);
        for turns in self.countdowns.values_mut() {
            *turns = (*turns - 1).max(0);
        }
        self.effects.retain(|_, turns| {
            *turns = turns.saturating_sub(1);
            *turns > 0
        });
    }

    /// Moves `item` into `slot`, returning whatever was there to the inventory.
    pub fn equip(&mut self, slot: Slot, item: Option<ItemId>) {
        if let Some(previous) = self.equipment.remove(&slot) {
            self.adjust_item(&previous, 1);
        }
        if let Some(item) = item {
            self.adjust_item(&item, -1);
            self.equipment.insert(slot, item);
        }
    }

    pub fn set_companion(&mut self, companion: Option<CompanionId>) {
        self.companion = companion;
    }

    fn is_equipped(&self, item: &ItemId) -> bool {
        self.equipment.values().any(|worn| worn == item)
    }
}

impl WorldQuery for WorldSnapshot {
    fn possesses(&self, entity: &Entity) -> bool {
        match entity {
            Entity::Item(item) => self.item_amount(item) > 0 || self.is_equipped(item),
            Entity::Skill(skill) => self.skills.contains(skill),
            Entity::Companion(companion) => self.companions.contains(companion),
            Entity::Effect(effect) => self.effects.get(effect).is_some_and(|turns| *turns > 0),
        }
    }

    fn can_equip(&self, item: &ItemId) -> bool {
        self.item_type(item).is_wearable() && !self.unequippable.contains(item)
    }

    fn item_amount(&self, item: &ItemId) -> u32 {
        self.inventory.get(item).copied().unwrap_or(0)
    }

    fn inventory(&self) -> BTreeMap<ItemId, u32> {
        self.inventory.clone()
    }

    fn counter(&self, name: &str) -> i64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    fn countdown(&self, name: &str) -> Option<i64> {
        self.countdowns.get(name).copied()
    }

    fn attribute(&self, attribute: Attribute) -> i64 {
        self.attributes.get(&attribute).copied().unwrap_or(0)
    }

    fn property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }

    fn flags(&self) -> BTreeSet<String> {
        self.flags.clone()
    }

    fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    fn entities_at(&self, location: &LocationId) -> Vec<MonsterId> {
        self.catalog
            .locations
            .get(location)
            .map(|info| info.monsters.clone())
            .unwrap_or_default()
    }

    fn monster(&self, monster: &MonsterId) -> Option<MonsterInfo> {
        self.catalog.monsters.get(monster).cloned()
    }

    fn zone_of(&self, location: &LocationId) -> Option<String> {
        self.catalog
            .locations
            .get(location)
            .map(|info| info.zone.clone())
    }

    fn item_type(&self, item: &ItemId) -> ItemType {
        self.catalog
            .items
            .get(item)
            .map(|info| info.item_type)
            .unwrap_or_default()
    }

    fn market_value(&self, item: &ItemId) -> i64 {
        self.catalog.items.get(item).map_or(0, |info| info.value)
    }

    fn character_class(&self) -> CharacterClass {
        self.class
    }

    fn companion(&self) -> Option<CompanionId> {
        self.companion.clone()
    }

    fn equipped(&self, slot: Slot) -> Option<ItemId> {
        self.equipment.get(&slot).cloned()
    }
}
