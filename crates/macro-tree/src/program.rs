//! Chainable macro builder.
//!
//! [`Macro`] accumulates steps in priority order and produces a
//! [`MacroNode::Sequence`]. Two kinds of branching are available and must not
//! be confused:
//!
//! - **Live branching** ([`Macro::if_`], [`Macro::while_`]) embeds the guard in
//!   the script; the interpreter decides at encounter time.
//! - **Compile-time inclusion** ([`Macro::external_if`]) decides now, from the
//!   world snapshot the caller already consulted, whether the steps appear in
//!   the script at all.

use crate::{Condition, MacroNode, Script};

/// Ordered list of macro steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Macro {
    steps: Vec<MacroNode>,
}

impl Macro {
    /// Creates an empty macro.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a raw node. Empty sequences are dropped.
    fn node(mut self, node: MacroNode) -> Self {
        if !node.is_empty() {
            self.steps.push(node);
        }
        self
    }

    /// Appends all steps of another macro.
    pub fn step(mut self, other: Macro) -> Self {
        self.steps.extend(other.steps);
        self
    }

    pub fn attack(self) -> Self {
        self.node(MacroNode::Attack)
    }

    pub fn skill(self, skill: impl Into<String>) -> Self {
        self.node(MacroNode::UseSkill(skill.into()))
    }

    pub fn item(self, item: impl Into<String>) -> Self {
        self.node(MacroNode::UseItem(item.into()))
    }

    pub fn item_pair(self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.node(MacroNode::UseItemPair(first.into(), second.into()))
    }

    pub fn pickpocket(self) -> Self {
        self.node(MacroNode::Pickpocket)
    }

    pub fn repeat(self) -> Self {
        self.node(MacroNode::Repeat)
    }

    pub fn abort(self) -> Self {
        self.node(MacroNode::Abort)
    }

    /// Casts `skill` only if the interpreter sees it as castable this round.
    pub fn try_skill(self, skill: impl Into<String>) -> Self {
        let skill = skill.into();
        self.if_(
            Condition::has_skill(skill.clone()),
            Macro::new().skill(skill),
        )
    }

    /// Like [`Macro::try_skill`], retrying the skill every round.
    pub fn try_skill_repeat(self, skill: impl Into<String>) -> Self {
        let skill = skill.into();
        self.if_(
            Condition::has_skill(skill.clone()),
            Macro::new().skill(skill).repeat(),
        )
    }

    /// Throws `item` only if the interpreter sees it in the combat inventory.
    pub fn try_item(self, item: impl Into<String>) -> Self {
        let item = item.into();
        self.if_(Condition::has_item(item.clone()), Macro::new().item(item))
    }

    /// Throws two items in one round if both are available.
    pub fn try_item_pair(self, first: impl Into<String>, second: impl Into<String>) -> Self {
        let (first, second) = (first.into(), second.into());
        self.if_(
            Condition::has_item(first.clone()).and(Condition::has_item(second.clone())),
            Macro::new().item_pair(first, second),
        )
    }

    /// Live conditional. An empty body compiles to nothing.
    pub fn if_(self, guard: Condition, then: Macro) -> Self {
        if then.is_empty() {
            return self;
        }
        self.node(MacroNode::Conditional {
            guard,
            then: Box::new(then.into_node()),
        })
    }

    /// Live loop. An empty body compiles to nothing.
    pub fn while_(self, guard: Condition, body: Macro) -> Self {
        if body.is_empty() {
            return self;
        }
        self.node(MacroNode::Loop {
            guard,
            body: Box::new(body.into_node()),
        })
    }

    /// Compile-time inclusion: appends `steps` only when `include` is true.
    pub fn external_if(self, include: bool, steps: Macro) -> Self {
        if include { self.step(steps) } else { self }
    }

    /// Compile-time choice between two step lists.
    pub fn external_if_else(self, include: bool, steps: Macro, otherwise: Macro) -> Self {
        if include {
            self.step(steps)
        } else {
            self.step(otherwise)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Converts the accumulated steps into a sequence node.
    pub fn into_node(self) -> MacroNode {
        MacroNode::Sequence(self.steps)
    }

    /// Serializes the macro into a flat instruction script.
    pub fn compile(&self) -> Script {
        Script::compile_steps(&self.steps)
    }
}
