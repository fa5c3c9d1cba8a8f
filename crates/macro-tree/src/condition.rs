//! Live guard expressions.
//!
//! A [`Condition`] describes a fact that is only known once an encounter is
//! underway (which opponent appeared, how much health it has left, whether the
//! actor still knows a skill). The compiler never evaluates a condition; it
//! embeds the expression into the script so the external interpreter can
//! evaluate it at encounter time.

use core::fmt;

/// Guard expression evaluated by the script interpreter, not by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    /// The current opponent has this exact name.
    Monster(String),

    /// The current opponent's remaining health is above the threshold.
    MonsterHpAbove(i64),

    /// The actor can cast this skill right now.
    HasSkill(String),

    /// The actor carries this combat item right now.
    HasItem(String),

    /// Logical negation.
    Not(Box<Condition>),

    /// All operands hold. An empty conjunction is true.
    And(Vec<Condition>),

    /// Any operand holds. An empty disjunction is false.
    Or(Vec<Condition>),
}

impl Condition {
    /// Guard matching the current opponent by name.
    pub fn monster(name: impl Into<String>) -> Self {
        Condition::Monster(name.into())
    }

    /// Guard matching any of the given opponents.
    ///
    /// A single name collapses to [`Condition::Monster`] so the rendered
    /// script stays minimal.
    pub fn any_monster<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut operands: Vec<Condition> = names.into_iter().map(Condition::monster).collect();
        if operands.len() == 1 {
            operands.remove(0)
        } else {
            Condition::Or(operands)
        }
    }

    /// Guard that the actor can cast `skill`.
    pub fn has_skill(skill: impl Into<String>) -> Self {
        Condition::HasSkill(skill.into())
    }

    /// Guard that the actor carries `item`.
    pub fn has_item(item: impl Into<String>) -> Self {
        Condition::HasItem(item.into())
    }

    /// Negates this guard, unwrapping a double negation.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        match self {
            Condition::Not(inner) => *inner,
            other => Condition::Not(Box::new(other)),
        }
    }

    /// Conjunction of `self` and `other`, flattening nested conjunctions.
    pub fn and(self, other: Condition) -> Self {
        let mut operands = match self {
            Condition::And(operands) => operands,
            single => vec![single],
        };
        match other {
            Condition::And(rest) => operands.extend(rest),
            single => operands.push(single),
        }
        Condition::And(operands)
    }

    fn is_compound(&self) -> bool {
        matches!(self, Condition::And(ops) | Condition::Or(ops) if ops.len() > 1)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Monster(name) => write!(f, "monstername {name}"),
            Condition::MonsterHpAbove(hp) => write!(f, "monsterhpabove {hp}"),
            Condition::HasSkill(skill) => write!(f, "hasskill {skill}"),
            Condition::HasItem(item) => write!(f, "hascombatitem {item}"),
            Condition::Not(inner) if inner.is_compound() => write!(f, "!({inner})"),
            Condition::Not(inner) => write!(f, "!{inner}"),
            Condition::And(operands) => write_joined(f, operands, " && ", "true"),
            Condition::Or(operands) => write_joined(f, operands, " || ", "false"),
        }
    }
}

fn write_joined(
    f: &mut fmt::Formatter<'_>,
    operands: &[Condition],
    separator: &str,
    empty: &str,
) -> fmt::Result {
    if operands.is_empty() {
        return f.write_str(empty);
    }
    for (index, operand) in operands.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        if operand.is_compound() {
            write!(f, "({operand})")?;
        } else {
            write!(f, "{operand}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_negated_conjunction_of_names() {
        let guard = Condition::monster("Crimbuccaneer mudlark")
            .not()
            .and(Condition::monster("Elf Guard engineer").not());

        assert_eq!(
            guard.to_string(),
            "!monstername Crimbuccaneer mudlark && !monstername Elf Guard engineer"
        );
    }

    #[test]
    fn double_negation_collapses() {
        let guard = Condition::has_skill("Extract").not().not();
        assert_eq!(guard, Condition::has_skill("Extract"));
    }

    #[test]
    fn nested_disjunction_is_parenthesized() {
        let guard = Condition::any_monster(["sausage goblin", "void guy"])
            .and(Condition::MonsterHpAbove(30));

        assert_eq!(
            guard.to_string(),
            "(monstername sausage goblin || monstername void guy) && monsterhpabove 30"
        );
    }

    #[test]
    fn single_monster_list_is_not_wrapped() {
        assert_eq!(
            Condition::any_monster(["sausage goblin"]),
            Condition::monster("sausage goblin")
        );
    }
}
