//! Holiday island definitions.

use agent_core::{LocationId, MonsterId};

use crate::names::{locations, monsters};

/// A farmable island.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Island {
    /// Short name used in configuration.
    pub name: &'static str,
    pub location: LocationId,
    /// Damage element the island deals; resisting it is the first modifier.
    pub element: &'static str,
    /// Choice adventure the island presents; option 2 keeps the actor on it.
    pub choice: u32,
    /// Opponent worth keeping in the crystal orb's prediction.
    pub orb_target: MonsterId,
}

pub static ISLANDS: [Island; 3] = [
    Island {
        name: "atoll",
        location: locations::SMOLDERING_ATOLL,
        element: "hot",
        choice: 1460,
        orb_target: monsters::CRIMBUCCANEER_MUDLARK,
    },
    Island {
        name: "reef",
        location: locations::FROZEN_REEF,
        element: "cold",
        choice: 1461,
        orb_target: monsters::ELF_GUARD_ENGINEER,
    },
    Island {
        name: "grove",
        location: locations::FESTERING_GROVE,
        element: "stench",
        choice: 1462,
        orb_target: monsters::CRIMBUCCANEER_BOSUN,
    },
];

/// Island by configured name, falling back to the first island.
pub fn island(name: Option<&str>) -> &'static Island {
    name.and_then(|name| {
        ISLANDS
            .iter()
            .find(|island| island.name.eq_ignore_ascii_case(name))
    })
    .unwrap_or(&ISLANDS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back_to_first_island() {
        assert_eq!(island(Some("REEF")).element, "cold");
        assert_eq!(island(Some("nowhere")).name, "atoll");
        assert_eq!(island(None).name, "atoll");
    }
}
