/// Which content the run farms once the global tasks are exhausted.
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
pub enum Zone {
    Cafe,
    #[default]
    Island,
}

/// How long a run lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnBudget {
    /// Spend this many turns, or stop earlier when no turns remain.
    Play(i64),
    /// Stop once only this many turns remain.
    Reserve(i64),
}

impl TurnBudget {
    /// Positive values play that many turns; zero and negative values keep
    /// that many turns in reserve.
    pub const fn from_turns(turns: i64) -> Self {
        if turns > 0 {
            TurnBudget::Play(turns)
        } else {
            TurnBudget::Reserve(-turns)
        }
    }
}

/// Agent configuration and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Turn budget, see [`TurnBudget::from_turns`].
    pub turns: i64,
    /// Meat value of one turn, used by turn-generating equipment.
    pub value_of_adventure: f64,
    /// Bring the gift-bearing companion when its gift is pending.
    pub shrub: bool,
    pub zone: Zone,
    /// Island to farm; the first catalog island when unset.
    pub island: Option<String>,
    /// Opponent to mark for repeat encounters.
    pub sniff_target: Option<String>,
    /// Opponent the crystal orb should keep predicted.
    pub orb_target: Option<String>,
}

impl AgentConfig {
    pub const DEFAULT_TURNS: i64 = 0;
    pub const DEFAULT_VALUE_OF_ADVENTURE: f64 = 6_000.0;

    /// Upper bound on choices followed from a single action.
    pub const MAX_CHOICE_CHAIN: usize = 10;

    pub fn new() -> Self {
        Self {
            turns: Self::DEFAULT_TURNS,
            value_of_adventure: Self::DEFAULT_VALUE_OF_ADVENTURE,
            shrub: false,
            zone: Zone::default(),
            island: None,
            sniff_target: None,
            orb_target: None,
        }
    }

    pub fn budget(&self) -> TurnBudget {
        TurnBudget::from_turns(self.turns)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}
