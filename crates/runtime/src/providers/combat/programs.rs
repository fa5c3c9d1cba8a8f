//! Complete combat programs.
use agent_content::{items, monsters, skills};
use agent_core::{CapabilityPort, ItemId, MonsterId, Usable};
use macro_tree::{Condition, Macro};

use super::CombatCompiler;

const STANDARD_ITEMS: [ItemId; 4] = [
    items::RAIN_DOH_BLUE_BALLS,
    items::TIME_SPINNER,
    items::RAIN_DOH_INDIGO_CUP,
    items::PORQUOISE_SIXGUN,
];

const HARD_ITEMS: [ItemId; 5] = [
    items::TRAIN_WHISTLE,
    items::TIME_SPINNER,
    items::LITTLE_RED_BOOK,
    items::RAIN_DOH_INDIGO_CUP,
    items::PORQUOISE_SIXGUN,
];

/// Boom box song that unlocks the sing-along.
const MEAT_SONG: &str = "Total Eclipse of Your Meat";

impl<'a> CombatCompiler<'a> {
    /// Default program for ordinary fights: squeeze value out of the opponent,
    /// then attack until it dies.
    pub fn standard(&self) -> Macro {
        let world = self.world();
        let sing_along = world.property("boomBoxSong").as_deref() == Some(MEAT_SONG);

        Macro::new()
            .step(self.special_opponents())
            .if_(
                Condition::monster(monsters::CRIMBUCCANEER_MUDLARK.as_str())
                    .not()
                    .and(Condition::monster(monsters::ELF_GUARD_ENGINEER.as_str()).not()),
                Macro::new().pickpocket(),
            )
            .step(self.have_skill(&skills::CURSE_OF_WEAKSAUCE))
            .step(self.sniff())
            .step(self.familiar_actions())
            .external_if(sing_along, Macro::new().try_skill(skills::SING_ALONG.as_str()))
            .step(self.have_skill(&skills::EXTRACT))
            .external_if(
                world.knows_skill(&skills::METEOR_LORE),
                Macro::new().try_skill(skills::MICROMETEORITE.as_str()),
            )
            .try_skill(skills::POCKET_CRUMBS.as_str())
            .step(self.do_items(&STANDARD_ITEMS))
            .step(self.goo_kill())
            .attack()
            .repeat()
    }

    /// Program for opponents that must die even when attacks fall short.
    pub fn hard(&self) -> Macro {
        Macro::new()
            .step(self.special_opponents())
            .step(self.have_skill(&skills::CURSE_OF_WEAKSAUCE))
            .step(self.familiar_actions())
            .external_if(
                self.world().knows_skill(&skills::METEOR_LORE),
                Macro::new().skill(skills::MICROMETEORITE.as_str()),
            )
            .step(self.have_skill(&skills::POCKET_CRUMBS))
            .step(self.do_items(&HARD_ITEMS))
            .try_skill(skills::BOWL_SIDEWAYS.as_str())
            .step(self.goo_kill())
            .step(self.hard_kill())
            .attack()
            .repeat()
    }

    /// Ends the fight with `action`, handing control back if it fails.
    pub fn kill_with(&self, action: &Usable) -> Macro {
        Macro::new()
            .step(self.sniff())
            .step(self.familiar_actions())
            .step(self.use_action(action))
            .abort()
    }

    /// Escapes the fight with `action`, handing control back if it fails.
    pub fn run_with(&self, action: &Usable) -> Macro {
        Macro::new().step(self.use_action(action)).abort()
    }

    /// Fights free opponents normally and spends the yellow ray on the rest.
    pub fn yellow_ray_unless_free(&self) -> Macro {
        let world = self.world();
        let mut free = vec![monsters::SAUSAGE_GOBLIN.to_string()];
        if let Some(romance) = world.property("romanticTarget") {
            let romance_is_free = world
                .monster(&MonsterId::owned(romance.clone()))
                .is_some_and(|info| info.free);
            if romance_is_free && !free.contains(&romance) {
                free.push(romance);
            }
        }

        Macro::new()
            .if_(Condition::any_monster(free), self.standard())
            .skill(skills::SPIT_JURASSIC_ACID.as_str())
            .abort()
    }
}
