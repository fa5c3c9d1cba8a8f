//! Macro tree nodes.
//!
//! A compiled program is a [`MacroNode::Sequence`]. The interpreter walks the
//! children strictly in order and performs the first one that applies this
//! round, repeating every round until the encounter ends or an
//! [`MacroNode::Abort`] is reached. Guards are carried as [`Condition`] data.

use crate::Condition;

/// A node in a combat macro tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MacroNode {
    /// Basic weapon attack.
    Attack,

    /// Cast a skill by name.
    UseSkill(String),

    /// Throw a single combat item.
    UseItem(String),

    /// Throw two combat items in the same round.
    ///
    /// Only emitted when the actor can use two items at once.
    UseItemPair(String, String),

    /// Attempt to steal from the opponent before the first round.
    Pickpocket,

    /// Run `then` when the guard holds.
    Conditional { guard: Condition, then: Box<MacroNode> },

    /// Run `body` for as long as the guard holds.
    Loop { guard: Condition, body: Box<MacroNode> },

    /// Retry the preceding step every round while it still applies.
    Repeat,

    /// Stop the script and hand control back to the host.
    Abort,

    /// Ordered children; first applicable wins each round.
    Sequence(Vec<MacroNode>),
}

impl MacroNode {
    /// Returns `true` for an empty sequence, which serializes to nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, MacroNode::Sequence(children) if children.iter().all(MacroNode::is_empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_empty_sequences_are_empty() {
        let node = MacroNode::Sequence(vec![MacroNode::Sequence(vec![]), MacroNode::Sequence(vec![])]);
        assert!(node.is_empty());
    }

    #[test]
    fn guarded_steps_are_not_empty() {
        let node = MacroNode::Loop {
            guard: Condition::MonsterHpAbove(10),
            body: Box::new(MacroNode::Sequence(vec![MacroNode::Abort])),
        };
        assert!(!node.is_empty());
    }
}
