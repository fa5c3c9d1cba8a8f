//! Equipment slots and item kinds.

/// Equipment slot. Declaration order is the order slots are filled and logged.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Slot {
    Hat,
    Back,
    Shirt,
    Weapon,
    Offhand,
    Pants,
    Acc1,
    Acc2,
    Acc3,
    Famequip,
}

impl Slot {
    pub const ACCESSORIES: [Slot; 3] = [Slot::Acc1, Slot::Acc2, Slot::Acc3];

    pub const fn is_accessory(self) -> bool {
        matches!(self, Slot::Acc1 | Slot::Acc2 | Slot::Acc3)
    }
}

/// Kind of an item as the host classifies it.
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
pub enum ItemType {
    Hat,
    Back,
    Shirt,
    Weapon,
    Offhand,
    Shield,
    Pants,
    Accessory,
    FamiliarEquipment,
    Combat,
    Usable,
    #[default]
    Other,
}

impl ItemType {
    /// Slot an item of this kind is worn in. Accessories report the first
    /// accessory slot.
    pub const fn slot(self) -> Option<Slot> {
        match self {
            ItemType::Hat => Some(Slot::Hat),
            ItemType::Back => Some(Slot::Back),
            ItemType::Shirt => Some(Slot::Shirt),
            ItemType::Weapon => Some(Slot::Weapon),
            ItemType::Offhand | ItemType::Shield => Some(Slot::Offhand),
            ItemType::Pants => Some(Slot::Pants),
            ItemType::Accessory => Some(Slot::Acc1),
            ItemType::FamiliarEquipment => Some(Slot::Famequip),
            ItemType::Combat | ItemType::Usable | ItemType::Other => None,
        }
    }

    pub const fn is_wearable(self) -> bool {
        self.slot().is_some()
    }
}
