//! Numeric character attributes, primary stats, classes and sobriety.

/// Numeric attribute of the actor as reported by the host.
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
pub enum Attribute {
    /// Turns the actor can still spend today.
    Adventures,
    /// Turns spent this run, as counted by the host's turn counter.
    Turncount,
    /// Turns spent over the whole character lifetime.
    TurnsPlayed,
    Inebriety,
    InebrietyLimit,
    /// Remaining stomach capacity.
    RemainingStomach,
    /// Buffed muscle.
    Muscle,
    /// Buffed mysticality.
    Mysticality,
    /// Buffed moxie.
    Moxie,
    /// Weight of the current companion.
    FamiliarWeight,
    /// Percent chance the next sausage goblin appears, scaled to 0..=100.
    SausageGoblinChance,
}

/// Primary stat.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Stat {
    Muscle,
    Mysticality,
    Moxie,
}

impl Stat {
    /// Attribute holding the buffed value of this stat.
    pub const fn buffed(self) -> Attribute {
        match self {
            Stat::Muscle => Attribute::Muscle,
            Stat::Mysticality => Attribute::Mysticality,
            Stat::Moxie => Attribute::Moxie,
        }
    }
}

/// Character class.
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
pub enum CharacterClass {
    #[default]
    SealClubber,
    TurtleTamer,
    Pastamancer,
    Sauceror,
    DiscoBandit,
    AccordionThief,
    /// Path class whose combat options come from absorbed skills.
    GreyGoo,
}

impl CharacterClass {
    pub const fn primestat(self) -> Stat {
        match self {
            CharacterClass::SealClubber | CharacterClass::TurtleTamer => Stat::Muscle,
            CharacterClass::Pastamancer | CharacterClass::Sauceror => Stat::Mysticality,
            CharacterClass::DiscoBandit
            | CharacterClass::AccordionThief
            | CharacterClass::GreyGoo => Stat::Moxie,
        }
    }

    /// Moxie classes steal without any equipment.
    pub const fn can_pickpocket(self) -> bool {
        matches!(
            self,
            CharacterClass::DiscoBandit | CharacterClass::AccordionThief
        )
    }
}

/// Sobriety state a task requires.
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
pub enum Sobriety {
    Sober,
    Intoxicated,
    #[default]
    Either,
}

impl Sobriety {
    /// Whether a task with this requirement may run in the given state.
    pub const fn admits(self, intoxicated: bool) -> bool {
        match self {
            Sobriety::Sober => !intoxicated,
            Sobriety::Intoxicated => intoxicated,
            Sobriety::Either => true,
        }
    }
}
