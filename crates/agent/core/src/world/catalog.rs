//! Static facts about items, monsters and locations.
//!
//! The catalog is data the host already knows and never changes during a run.
//! Snapshots carry their own catalog; entries missing from it are filled from
//! the built-in content catalog at load time.

use std::collections::BTreeMap;

use crate::{ItemId, ItemType, LocationId, MonsterId};

/// Opponent classification used by sniffing and pants rules.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Phylum {
    Beast,
    Bug,
    Construct,
    Demon,
    #[default]
    Dude,
    Elemental,
    Elf,
    Fish,
    Goblin,
    Hobo,
    Horror,
    Humanoid,
    Orc,
    Penguin,
    Pirate,
    Plant,
    Slime,
    Undead,
    Weird,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemInfo {
    pub item_type: ItemType,
    /// Market value used by every valuation in the core.
    pub value: i64,
}

impl ItemInfo {
    pub const fn new(item_type: ItemType, value: i64) -> Self {
        Self { item_type, value }
    }
}

/// Item an opponent drops, with its drop rate in `0.0..=1.0`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDrop {
    pub item: ItemId,
    pub rate: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonsterInfo {
    pub phylum: Phylum,
    /// Fighting this opponent does not consume a turn.
    pub free: bool,
    pub drops: Vec<ItemDrop>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocationInfo {
    pub zone: String,
    pub monsters: Vec<MonsterId>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Catalog {
    pub items: BTreeMap<ItemId, ItemInfo>,
    pub monsters: BTreeMap<MonsterId, MonsterInfo>,
    pub locations: BTreeMap<LocationId, LocationInfo>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: ItemId, info: ItemInfo) -> Self {
        self.items.insert(item, info);
        self
    }

    pub fn with_monster(mut self, monster: MonsterId, info: MonsterInfo) -> Self {
        self.monsters.insert(monster, info);
        self
    }

    pub fn with_location(mut self, location: LocationId, info: LocationInfo) -> Self {
        self.locations.insert(location, info);
        self
    }

    /// Fills entries this catalog lacks from `defaults`. Existing entries win.
    pub fn merge_defaults(&mut self, defaults: &Catalog) {
        for (id, info) in &defaults.items {
            self.items.entry(id.clone()).or_insert_with(|| info.clone());
        }
        for (id, info) in &defaults.monsters {
            self.monsters.entry(id.clone()).or_insert_with(|| info.clone());
        }
        for (id, info) in &defaults.locations {
            self.locations.entry(id.clone()).or_insert_with(|| info.clone());
        }
    }
}
