//! Built-in catalog of item kinds, values, opponents and locations.
//!
//! Snapshots only need to describe what differs from this table; loaders merge
//! it underneath whatever the snapshot provides.

use agent_core::{
    Catalog, ItemId, ItemInfo, ItemType, LocationInfo, MonsterId, MonsterInfo, Phylum,
};

use crate::islands::ISLANDS;
use crate::names::{HOLIDAY_ISLANDS, items, locations, monsters};

static WEARABLES: &[(ItemId, ItemType)] = &[
    (items::JUNE_CLEAVER, ItemType::Weapon),
    (items::COSPLAY_SABER, ItemType::Weapon),
    (items::SHERIFF_PISTOL, ItemType::Weapon),
    (items::JOKESTERS_GUN, ItemType::Weapon),
    (items::PROTON_PACK, ItemType::Back),
    (items::BUDDY_BJORN, ItemType::Back),
    (items::CROWN_OF_THRONES, ItemType::Hat),
    (items::JURASSIC_PARKA, ItemType::Shirt),
    (items::GREAT_WOLF_TROUSERS, ItemType::Pants),
    (items::DESIGNER_SWEATPANTS, ItemType::Pants),
    (items::PANTSGIVING, ItemType::Pants),
    (items::TEARAWAY_PANTS, ItemType::Pants),
    (items::CURSED_MAGNIFYING_GLASS, ItemType::Offhand),
    (items::KRAMCO, ItemType::Offhand),
    (items::DRUNKULA_WINEGLASS, ItemType::Offhand),
    (items::DEFT_PIRATE_HOOK, ItemType::Offhand),
    (items::POTTED_PLANT, ItemType::Offhand),
    (items::VOTED_STICKER, ItemType::Accessory),
    (items::MAFIA_THUMB_RING, ItemType::Accessory),
    (items::LUCKY_GOLD_RING, ItemType::Accessory),
    (items::SCREEGE_SPECTACLES, ItemType::Accessory),
    (items::CHEENG_SPECTACLES, ItemType::Accessory),
    (items::SPRING_SHOES, ItemType::Accessory),
    (items::LIL_DOCTOR_BAG, ItemType::Accessory),
    (items::CINCHO_DE_MAYO, ItemType::Accessory),
    (items::CONTINUUM_TRANSFUNCTIONER, ItemType::Accessory),
    (items::SHERIFF_BADGE, ItemType::Accessory),
    (items::SHERIFF_MOUSTACHE, ItemType::Accessory),
    (items::CRYSTAL_BALL, ItemType::FamiliarEquipment),
    (items::TINY_STILLSUIT, ItemType::FamiliarEquipment),
    (items::AMULET_COIN, ItemType::FamiliarEquipment),
    (items::GNOMISH_KGNEE, ItemType::FamiliarEquipment),
    (items::BLUE_PLATE, ItemType::FamiliarEquipment),
    (items::BAG_OF_MANY_CONFECTIONS, ItemType::FamiliarEquipment),
];

static COMBAT_ITEMS: &[ItemId] = &[
    items::RAIN_DOH_BLUE_BALLS,
    items::TIME_SPINNER,
    items::RAIN_DOH_INDIGO_CUP,
    items::PORQUOISE_SIXGUN,
    items::TRAIN_WHISTLE,
    items::LITTLE_RED_BOOK,
    items::PRANK_CRIMBO_CARD,
    items::TRICK_COIN,
    items::SHADOW_BRICK,
    items::REPLICA_BATOOMERANG,
];

static CURRENCIES: &[(ItemId, i64)] = &[
    (items::HOBO_NICKEL, 100),
    (items::SAND_DOLLAR, 1_200),
    (items::FREDDY_KRUEGERAND, 2_000),
    (items::BEACH_BUCK, 1_500),
    (items::COINSPIRACY, 1_800),
    (items::FUNFUNDS, 1_000),
    (items::VOLCOINO, 30_000),
    (items::WALMART_GIFT_CERTIFICATE, 900),
    (items::RUBEE, 700),
];

/// Opponents living on each island, in island order.
static ISLAND_MONSTERS: [&[(MonsterId, Phylum)]; 3] = [
    &[
        (monsters::CRIMBUCCANEER_MUDLARK, Phylum::Pirate),
        (monsters::SCORCHED_ELF, Phylum::Elf),
    ],
    &[
        (monsters::ELF_GUARD_ENGINEER, Phylum::Elf),
        (monsters::FROSTBITTEN_KELP, Phylum::Plant),
    ],
    &[
        (monsters::ROTTING_MANGROVE, Phylum::Plant),
        (monsters::CRIMBUCCANEER_BOSUN, Phylum::Pirate),
    ],
];

/// Builds the built-in catalog.
pub fn default_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    for (item, item_type) in WEARABLES {
        catalog
            .items
            .insert(item.clone(), ItemInfo::new(*item_type, 0));
    }
    for item in COMBAT_ITEMS {
        catalog
            .items
            .insert(item.clone(), ItemInfo::new(ItemType::Combat, 0));
    }
    for (item, value) in CURRENCIES {
        catalog
            .items
            .insert(item.clone(), ItemInfo::new(ItemType::Other, *value));
    }
    for item in [items::CLARAS_BELL, items::PILL_KEEPER, items::APRILING_TUBA] {
        catalog
            .items
            .insert(item, ItemInfo::new(ItemType::Usable, 0));
    }

    for (island, residents) in ISLANDS.iter().zip(ISLAND_MONSTERS.iter()) {
        catalog.locations.insert(
            island.location.clone(),
            LocationInfo {
                zone: HOLIDAY_ISLANDS.to_owned(),
                monsters: residents.iter().map(|(id, _)| id.clone()).collect(),
            },
        );
        for (monster, phylum) in residents.iter() {
            catalog.monsters.insert(
                monster.clone(),
                MonsterInfo {
                    phylum: *phylum,
                    free: false,
                    drops: Vec::new(),
                },
            );
        }
    }

    catalog.monsters.insert(
        monsters::SAUSAGE_GOBLIN,
        MonsterInfo {
            phylum: Phylum::Goblin,
            free: true,
            drops: Vec::new(),
        },
    );
    for monster in monsters::VOID_MONSTERS.into_iter().chain(monsters::VOTE_MONSTERS) {
        catalog.monsters.insert(
            monster,
            MonsterInfo {
                phylum: Phylum::Weird,
                free: true,
                drops: Vec::new(),
            },
        );
    }

    for (location, zone) in [
        (locations::NOOB_CAVE, "Mountain"),
        (locations::DRUNKEN_STUPOR, "Town"),
        (locations::HAUNTED_STORAGE_ROOM, "Manor1"),
        (locations::ICY_PEAK, "McLarge"),
        (locations::CAFE, "Crimbo23"),
        (locations::VANYAS_CASTLE, "8-Bit"),
        (locations::GINGERBREAD_CIVIC_CENTER, "Gingerbread City"),
    ] {
        catalog.locations.insert(
            location,
            LocationInfo {
                zone: zone.to_owned(),
                monsters: Vec::new(),
            },
        );
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn islands_live_in_the_holiday_zone() {
        let catalog = default_catalog();
        for island in &ISLANDS {
            let info = &catalog.locations[&island.location];
            assert_eq!(info.zone, HOLIDAY_ISLANDS);
            assert!(!info.monsters.is_empty());
        }
    }

    #[test]
    fn accessories_are_wearable() {
        let catalog = default_catalog();
        assert_eq!(
            catalog.items[&items::LUCKY_GOLD_RING].item_type,
            ItemType::Accessory
        );
        assert_eq!(catalog.items[&items::VOLCOINO].value, 30_000);
    }
}
