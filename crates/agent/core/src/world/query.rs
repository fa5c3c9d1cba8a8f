//! Read-only view of the world.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    Attribute, CharacterClass, CompanionId, EffectId, Entity, ItemId, ItemType, LocationId,
    MonsterId, MonsterInfo, SkillId, Slot,
};

/// Everything the decision core may ask about the world.
///
/// Implementations must be pure for the duration of a call: the same query
/// against an unchanged world returns the same answer. Predicates, value
/// functions and the compiler receive a `&dyn WorldQuery` explicitly and never
/// reach for global state.
pub trait WorldQuery {
    fn possesses(&self, entity: &Entity) -> bool;

    /// Whether the actor meets the requirements to wear `item`.
    fn can_equip(&self, item: &ItemId) -> bool;

    /// Unequipped copies of `item` in the inventory.
    fn item_amount(&self, item: &ItemId) -> u32;

    fn inventory(&self) -> BTreeMap<ItemId, u32>;

    /// Integer session property. Unknown names read as zero.
    fn counter(&self, name: &str) -> i64;

    /// Turns until the named countdown fires, if it is running.
    fn countdown(&self, name: &str) -> Option<i64>;

    fn attribute(&self, attribute: Attribute) -> i64;

    /// Free-form session property.
    fn property(&self, name: &str) -> Option<String>;

    fn flags(&self) -> BTreeSet<String>;

    fn has_flag(&self, flag: &str) -> bool {
        self.flags().contains(flag)
    }

    /// Opponents that can appear at `location`.
    fn entities_at(&self, location: &LocationId) -> Vec<MonsterId>;

    fn monster(&self, monster: &MonsterId) -> Option<MonsterInfo>;

    fn zone_of(&self, location: &LocationId) -> Option<String>;

    fn item_type(&self, item: &ItemId) -> ItemType;

    fn market_value(&self, item: &ItemId) -> i64;

    fn character_class(&self) -> CharacterClass;

    /// Companion currently accompanying the actor.
    fn companion(&self) -> Option<CompanionId>;

    fn equipped(&self, slot: Slot) -> Option<ItemId>;

    fn is_intoxicated(&self) -> bool {
        self.attribute(Attribute::Inebriety) > self.attribute(Attribute::InebrietyLimit)
    }
}

/// Capability checks phrased the way the compiler and optimizer ask them.
///
/// Blanket-implemented for every [`WorldQuery`], so any world view is a
/// capability port for free.
pub trait CapabilityPort {
    fn has_item(&self, item: &ItemId) -> bool;
    fn knows_skill(&self, skill: &SkillId) -> bool;
    fn has_companion(&self, companion: &CompanionId) -> bool;
    fn has_effect(&self, effect: &EffectId) -> bool;
    /// Possessed and wearable by the actor.
    fn can_wear(&self, item: &ItemId) -> bool;
}

impl<W: WorldQuery + ?Sized> CapabilityPort for W {
    fn has_item(&self, item: &ItemId) -> bool {
        self.possesses(&Entity::Item(item.clone()))
    }

    fn knows_skill(&self, skill: &SkillId) -> bool {
        self.possesses(&Entity::Skill(skill.clone()))
    }

    fn has_companion(&self, companion: &CompanionId) -> bool {
        self.possesses(&Entity::Companion(companion.clone()))
    }

    fn has_effect(&self, effect: &EffectId) -> bool {
        self.possesses(&Entity::Effect(effect.clone()))
    }

    fn can_wear(&self, item: &ItemId) -> bool {
        self.has_item(item) && self.can_equip(item)
    }
}
