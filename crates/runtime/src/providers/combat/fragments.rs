//! Reusable combat fragments.
use agent_content::{companions, items, monsters, skills};
use agent_core::{
    Attribute, CapabilityPort, CharacterClass, CompanionId, ItemId, ItemType, MonsterId, Phylum,
    SkillId, Slot, Stat, Usable, WorldQuery,
};
use macro_tree::{Condition, Macro};
use tracing::debug;

use super::CombatCompiler;
use crate::providers::loadout::{shrub_gift_pending, time_to_meatify};
use crate::providers::ranking::stable_max_by;

pub(crate) const VOID_FREE_FIGHTS: &str = "_voidFreeFights";
pub(crate) const VOID_FREE_FIGHT_LIMIT: i64 = 5;
pub(crate) const VOTE_FREE_FIGHTS: &str = "_voteFreeFights";
pub(crate) const VOTE_FREE_FIGHT_LIMIT: i64 = 3;

pub(crate) const DIGITIZE_USES: &str = "_sourceTerminalDigitizeUses";
pub(crate) const DIGITIZE_MONSTER: &str = "_sourceTerminalDigitizeMonster";
pub(crate) const DIGITIZE_MONSTER_COUNT: &str = "_sourceTerminalDigitizeMonsterCount";
const DIGITIZE_USE_LIMIT: i64 = 3;

/// Whether resetting the digitize counter beats letting the copy keep
/// recurring.
///
/// The gap before the `n`-th recurrence grows as `10n + 7` turns, so after
/// `count` recurrences the next `count + 1` cost `5(c+1)(c+2) - 3` turns in
/// total. Resetting pays off once the remaining turns cannot cover the
/// remaining uses at that spacing.
pub fn should_redigitize(world: &dyn WorldQuery) -> bool {
    let uses_left = DIGITIZE_USE_LIMIT - world.counter(DIGITIZE_USES);
    if uses_left <= 0 || world.property(DIGITIZE_MONSTER).is_none() {
        return false;
    }

    let recurrences = world.counter(DIGITIZE_MONSTER_COUNT) + 1;
    let turns_per_use = recurrences * (recurrences + 1) * 5 - 3;
    let turns = world.attribute(Attribute::Adventures) as f64;

    turns / 0.96 < (uses_left * turns_per_use) as f64
}

impl<'a> CombatCompiler<'a> {
    /// Tries `skill` in combat, but only if the actor knows it.
    pub fn have_skill(&self, skill: &SkillId) -> Macro {
        Macro::new().external_if(
            self.world.knows_skill(skill),
            Macro::new().try_skill(skill.as_str()),
        )
    }

    /// Throws `item` in combat, but only if the actor carries it.
    pub fn have_item(&self, item: &ItemId) -> Macro {
        Macro::new().external_if(
            self.world.has_item(item),
            Macro::new().try_item(item.as_str()),
        )
    }

    /// The skill or item that an island task fights with.
    pub fn use_action(&self, action: &Usable) -> Macro {
        match action {
            Usable::Skill(skill) => Macro::new().skill(skill.as_str()),
            Usable::Item(item) => Macro::new().item(item.as_str()),
        }
    }

    /// Re-digitizes the digitized opponent when a reset is worth a use.
    pub fn redigitize(&self) -> Macro {
        let Some(monster) = self.world.property(DIGITIZE_MONSTER) else {
            return Macro::new();
        };
        Macro::new().external_if(
            should_redigitize(self.world),
            Macro::new().if_(
                Condition::monster(monster),
                Macro::new().skill(skills::DIGITIZE.as_str()),
            ),
        )
    }

    /// Throws every carried item in `items`, two per round when the actor can
    /// dual-wield combat items.
    pub fn do_items(&self, items: &[ItemId]) -> Macro {
        let owned: Vec<&ItemId> = items
            .iter()
            .filter(|item| self.world.has_item(item))
            .collect();

        if !self.world.knows_skill(&skills::AMBIDEXTROUS_FUNKSLINGING) {
            return owned
                .into_iter()
                .fold(Macro::new(), |program, item| program.try_item(item.as_str()));
        }

        owned
            .chunks(2)
            .fold(Macro::new(), |program, pair| match pair {
                [first, second] => program.try_item_pair(first.as_str(), second.as_str()),
                [single] => program.try_item(single.as_str()),
                _ => program,
            })
    }

    /// Combat abilities granted by the active companion.
    pub fn familiar_actions(&self) -> Macro {
        let companion = self.world.companion();
        let active = |id: &CompanionId| companion.as_ref() == Some(id);

        Macro::new()
            .external_if(
                active(&companions::CRIMBO_SHRUB) && shrub_gift_pending(self.world),
                Macro::new().try_skill(skills::OPEN_BIG_RED_PRESENT.as_str()),
            )
            .external_if(
                active(&companions::GREY_GOOSE) && time_to_meatify(self.world),
                Macro::new().try_skill(skills::MEATIFY_MATTER.as_str()),
            )
    }

    /// Class finisher for a fight that must end with a kill.
    pub fn hard_kill(&self) -> Macro {
        let class = self.world.character_class();
        if class == CharacterClass::GreyGoo {
            return Macro::new();
        }

        let shield_equipped = self
            .world
            .equipped(Slot::Offhand)
            .is_some_and(|item| self.world.item_type(&item) == ItemType::Shield);

        Macro::new()
            .external_if(
                class.primestat() == Stat::Mysticality,
                Macro::new().try_skill_repeat(skills::SAUCEGEYSER.as_str()),
            )
            .external_if(
                class == CharacterClass::TurtleTamer
                    && shield_equipped
                    && self.world.knows_skill(&skills::SHIELDBUTT),
                Macro::new().try_skill_repeat(skills::SHIELDBUTT.as_str()),
            )
            .try_skill_repeat(skills::LUNGING_THRUST_SMACK.as_str())
            .try_skill_repeat(skills::KNEEBUTT.as_str())
    }

    /// Finisher for the absorbing path class, picked by buffed stat.
    pub fn goo_kill(&self) -> Macro {
        if self.world.character_class() != CharacterClass::GreyGoo {
            return Macro::new();
        }

        let options = [
            (skills::NANTLERS, Stat::Muscle),
            (skills::NANOSHOCK, Stat::Mysticality),
            (skills::AUDIOCLASM, Stat::Moxie),
        ];
        let best = stable_max_by(
            options
                .into_iter()
                .filter(|(skill, _)| self.world.knows_skill(skill)),
            |(_, stat)| self.world.attribute(stat.buffed()) as f64,
        );
        let Some((skill, stat)) = best else {
            return Macro::new();
        };
        debug!(target: "runtime::combat", skill = %skill, stat = %stat, "finisher selected");

        let can_loop = self.world.has_flag("monsterManuelAvailable")
            && self.world.knows_skill(&skills::INFINITE_LOOP);
        let threshold = self.world.attribute(Attribute::Moxie);
        Macro::new().external_if_else(
            can_loop,
            Macro::new()
                .while_(
                    Condition::MonsterHpAbove(threshold),
                    Macro::new().skill(skill.as_str()),
                )
                .skill(skills::INFINITE_LOOP.as_str())
                .repeat(),
            Macro::new().skill(skill.as_str()).repeat(),
        )
    }

    /// Marks the configured opponent for repeat encounters.
    ///
    /// The marking item depends on the opponent's phylum, and nothing is
    /// emitted while a previous mark on the same opponent is still running.
    pub fn sniff(&self) -> Macro {
        let Some(name) = self.config.sniff_target.as_deref() else {
            return Macro::new();
        };
        let Some(info) = self.world.monster(&MonsterId::owned(name)) else {
            return Macro::new();
        };

        let (item, marked, countdown) = match info.phylum {
            Phylum::Elf => (items::PRANK_CRIMBO_CARD, "_prankCardMonster", "Prank Card Monster"),
            Phylum::Pirate => (items::TRICK_COIN, "_trickCoinMonster", "Trick Coin Monster"),
            _ => return Macro::new(),
        };

        let already_marked = self.world.property(marked).as_deref() == Some(name)
            && self.world.countdown(countdown).is_some();
        if already_marked {
            return Macro::new();
        }

        Macro::new().if_(Condition::monster(name), self.have_item(&item))
    }

    /// Branches for free opponents that must be killed on sight.
    pub fn special_opponents(&self) -> Macro {
        let void = self.world.counter(VOID_FREE_FIGHTS) < VOID_FREE_FIGHT_LIMIT;
        let vote = self.world.counter(VOTE_FREE_FIGHTS) < VOTE_FREE_FIGHT_LIMIT;

        Macro::new()
            .external_if(
                void,
                Macro::new().if_(
                    Condition::any_monster(monsters::VOID_MONSTERS.iter().map(|m| m.to_string())),
                    self.free_kill(),
                ),
            )
            .external_if(
                vote,
                Macro::new().if_(
                    Condition::any_monster(monsters::VOTE_MONSTERS.iter().map(|m| m.to_string())),
                    self.free_kill(),
                ),
            )
    }

    fn free_kill(&self) -> Macro {
        Macro::new().step(self.goo_kill()).attack().repeat()
    }
}
