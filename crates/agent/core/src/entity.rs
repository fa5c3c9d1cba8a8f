//! Entities the actor can possess and the targets a task can act on.

use std::fmt;

use crate::{CompanionId, EffectId, ItemId, LocationId, SkillId};

/// Anything possession can be asked about.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entity {
    Item(ItemId),
    Skill(SkillId),
    Companion(CompanionId),
    Effect(EffectId),
}

impl From<ItemId> for Entity {
    fn from(value: ItemId) -> Self {
        Entity::Item(value)
    }
}

impl From<SkillId> for Entity {
    fn from(value: SkillId) -> Self {
        Entity::Skill(value)
    }
}

impl From<CompanionId> for Entity {
    fn from(value: CompanionId) -> Self {
        Entity::Companion(value)
    }
}

impl From<EffectId> for Entity {
    fn from(value: EffectId) -> Self {
        Entity::Effect(value)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Item(id) => write!(f, "item `{id}`"),
            Entity::Skill(id) => write!(f, "skill `{id}`"),
            Entity::Companion(id) => write!(f, "companion `{id}`"),
            Entity::Effect(id) => write!(f, "effect `{id}`"),
        }
    }
}

/// Something that can be used outside of a location visit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Usable {
    Item(ItemId),
    Skill(SkillId),
}

impl Usable {
    /// Name the script interpreter knows this usable by.
    pub fn name(&self) -> &str {
        match self {
            Usable::Item(id) => id.as_str(),
            Usable::Skill(id) => id.as_str(),
        }
    }
}

impl From<ItemId> for Usable {
    fn from(value: ItemId) -> Self {
        Usable::Item(value)
    }
}

impl From<SkillId> for Usable {
    fn from(value: SkillId) -> Self {
        Usable::Skill(value)
    }
}

impl fmt::Display for Usable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a task does with its turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    /// Spend a turn at a location.
    Adventure(LocationId),
    /// Use an item or cast a skill.
    Use(Usable),
}

impl Target {
    /// Location of an adventure target.
    pub fn location(&self) -> Option<&LocationId> {
        match self {
            Target::Adventure(location) => Some(location),
            Target::Use(_) => None,
        }
    }
}

impl From<LocationId> for Target {
    fn from(value: LocationId) -> Self {
        Target::Adventure(value)
    }
}

impl From<Usable> for Target {
    fn from(value: Usable) -> Self {
        Target::Use(value)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Adventure(location) => write!(f, "adventure at {location}"),
            Target::Use(usable) => write!(f, "use {usable}"),
        }
    }
}
