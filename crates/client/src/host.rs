//! In-memory host for dry runs.
use agent_core::{Attribute, LocationId, Result, Usable, WorldQuery, WorldSnapshot};
use macro_tree::Script;
use runtime::{
    ActionPort, EquipmentPort, Host, LoadoutSpec, Outcome, ScriptInterpreter, script_digest,
};
use tracing::info;

/// Host that plays every action against a [`WorldSnapshot`].
///
/// Navigation spends one turn and meets the first opponent the catalog lists
/// for the location. Choices and scripts are logged, never played out, so a
/// dry run shows what the engine would do without touching a game.
#[derive(Debug)]
pub struct DryRunHost {
    world: WorldSnapshot,
    journal: Vec<String>,
}

impl DryRunHost {
    pub fn new(world: WorldSnapshot) -> Self {
        Self {
            world,
            journal: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> &WorldSnapshot {
        &self.world
    }

    /// One line per host call, in order.
    pub fn journal(&self) -> &[String] {
        &self.journal
    }
}

impl ActionPort for DryRunHost {
    fn navigate(&mut self, location: &LocationId) -> Result<Outcome> {
        self.world.adjust_attribute(Attribute::Adventures, -1);
        self.world.advance_turn();

        let encounter = self.world.entities_at(location).into_iter().next();
        match &encounter {
            Some(monster) => self.journal.push(format!("visit {location}: {monster}")),
            None => self.journal.push(format!("visit {location}")),
        }
        Ok(encounter.map_or_else(Outcome::nothing, Outcome::encounter))
    }

    fn use_entity(&mut self, usable: &Usable) -> Result<Outcome> {
        if let Usable::Item(item) = usable {
            self.world.adjust_item(item, -1);
        }
        self.journal.push(format!("use {usable}"));
        Ok(Outcome::nothing())
    }

    fn resolve_choice(&mut self, choice: u32, decision: u32) -> Result<Outcome> {
        self.journal.push(format!("choice {choice}: option {decision}"));
        Ok(Outcome::nothing())
    }
}

impl EquipmentPort for DryRunHost {
    fn apply(&mut self, loadout: &LoadoutSpec) -> Result<()> {
        loadout.ensure_possessed(&self.world)?;
        for (slot, item) in &loadout.slots {
            if self.world.equipped(*slot).as_ref() != Some(item) {
                self.world.equip(*slot, Some(item.clone()));
            }
        }
        if loadout.companion.is_some() {
            self.world.set_companion(loadout.companion.clone());
        }
        Ok(())
    }
}

impl ScriptInterpreter for DryRunHost {
    fn execute(&mut self, script: &Script) -> Result<()> {
        let digest = script_digest(script);
        info!(target: "sortie::host", digest = %digest, "script handed to interpreter");
        self.journal.push(format!("fight with script {}", &digest[..12]));
        Ok(())
    }
}

impl Host for DryRunHost {
    fn world(&self) -> &dyn WorldQuery {
        &self.world
    }

    fn actions(&mut self) -> &mut dyn ActionPort {
        self
    }

    fn equipment(&mut self) -> &mut dyn EquipmentPort {
        self
    }

    fn interpreter(&mut self) -> &mut dyn ScriptInterpreter {
        self
    }
}

#[cfg(test)]
mod tests {
    use agent_core::{AgentConfig, ItemId, LocationInfo, MonsterId, Slot};
    use runtime::{Engine, Quest, Task};

    use super::*;

    const FIELD: LocationId = LocationId::new("field");
    const BOAR: MonsterId = MonsterId::new("boar");

    #[test]
    fn navigation_spends_a_turn_and_meets_the_first_opponent() {
        let world = WorldSnapshot::new()
            .with_attribute(Attribute::Adventures, 3)
            .with_location(
                FIELD,
                LocationInfo {
                    monsters: vec![BOAR],
                    ..LocationInfo::default()
                },
            );
        let mut host = DryRunHost::new(world);

        let outcome = host.navigate(&FIELD).unwrap();

        assert_eq!(outcome, Outcome::encounter(BOAR));
        assert_eq!(host.snapshot().attribute(Attribute::Adventures), 2);
        assert_eq!(host.journal(), ["visit field: boar"]);
    }

    #[test]
    fn unowned_equipment_is_refused() {
        let mut host = DryRunHost::new(WorldSnapshot::new());
        let spec = LoadoutSpec::new().with_slot(Slot::Weapon, ItemId::new("June cleaver"));

        let err = host.apply(&spec).unwrap_err();

        assert_eq!(err.error_code(), "RESOURCE_UNAVAILABLE");
        assert_eq!(host.snapshot().equipped(Slot::Weapon), None);
    }

    #[test]
    fn dry_run_drives_the_engine() {
        let world = WorldSnapshot::new()
            .with_attribute(Attribute::Adventures, 5)
            .with_item(ItemId::new("tonic"), 2)
            .with_location(
                FIELD,
                LocationInfo {
                    monsters: vec![BOAR],
                    ..LocationInfo::default()
                },
            );
        let tasks = vec![
            Task::new("drink", Usable::Item(ItemId::new("tonic")))
                .completed(|world| world.item_amount(&ItemId::new("tonic")) == 0),
            Task::new("hunt", FIELD),
        ];
        let engine = Engine::builder(AgentConfig {
            turns: 2,
            ..AgentConfig::default()
        })
        .quest(Quest::new("Day", tasks))
        .build();
        let mut host = DryRunHost::new(world);

        let report = engine.run(&mut host).unwrap();

        assert_eq!(report.cycles, 4);
        assert_eq!(host.journal()[..2], ["use tonic", "use tonic"]);
        assert_eq!(host.journal()[2], "visit field: boar");
        assert!(host.journal()[3].starts_with("fight with script "));
    }
}
