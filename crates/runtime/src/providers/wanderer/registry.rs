//! Built-in wanderer locations.
use agent_content::{ISLANDS, Island, island, items, locations};
use agent_core::{AgentConfig, Attribute, CapabilityPort, WorldQuery};

use super::{Candidate, WandererCategory};

/// Countdown that keeps a digitized copy coming back to the same place.
pub const DIGITIZE_COUNTDOWN: &str = "Digitize Monster";

const GINGERBREAD_TURNS: &str = "_gingerbreadCityTurns";
const GINGERBREAD_DAILY_TURNS: i64 = 20;

/// Every candidate in preference order. The configured island comes first so
/// it wins value ties.
pub fn standard_candidates(config: &AgentConfig) -> Vec<Candidate> {
    let preferred = island(config.island.as_deref());
    let islands = std::iter::once(preferred).chain(
        ISLANDS
            .iter()
            .filter(move |other| other.name != preferred.name),
    );

    let mut candidates: Vec<Candidate> = islands.map(island_candidate).collect();

    candidates.push(
        Candidate::new("Gingerbread City", locations::GINGERBREAD_CIVIC_CENTER)
            .categories(&[WandererCategory::Wanderer, WandererCategory::FreeRun])
            .gate(|world| {
                world.has_flag("gingerbreadCityAvailable") || world.has_flag("_gingerbreadCityToday")
            })
            .budget(|world| GINGERBREAD_DAILY_TURNS - world.counter(GINGERBREAD_TURNS)),
    );

    candidates.push(
        Candidate::new("Vanya's Castle", locations::VANYAS_CASTLE)
            .categories(&[
                WandererCategory::Wanderer,
                WandererCategory::Backup,
                WandererCategory::FreeRun,
            ])
            .gate(|world| world.has_item(&items::CONTINUUM_TRANSFUNCTIONER)),
    );

    candidates
}

fn island_candidate(island: &'static Island) -> Candidate {
    Candidate::new(island.name, island.location.clone())
        .categories(&[
            WandererCategory::Wanderer,
            WandererCategory::Backup,
            WandererCategory::YellowRay,
            WandererCategory::FreeFight,
        ])
        .budget(|world: &dyn WorldQuery| world.attribute(Attribute::Adventures))
        .repeat_while(DIGITIZE_COUNTDOWN)
        .choice(island.choice, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_island_leads() {
        let config = AgentConfig {
            island: Some("grove".to_owned()),
            ..AgentConfig::default()
        };
        let names: Vec<_> = standard_candidates(&config)
            .iter()
            .map(|candidate| candidate.name)
            .collect();

        assert_eq!(
            names,
            ["grove", "atoll", "reef", "Gingerbread City", "Vanya's Castle"]
        );
    }

    #[test]
    fn island_candidates_stay_on_island() {
        let candidates = standard_candidates(&AgentConfig::default());
        assert_eq!(candidates[0].choices.get(&1460), Some(&2));
    }
}
