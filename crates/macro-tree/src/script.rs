//! Flat instruction script serialization.
//!
//! The interpreter consumes a single line of `;`-terminated instructions:
//!
//! ```text
//! if hasskill Extract;skill Extract;endif;attack;repeat;
//! ```
//!
//! Serialization is a pure function of the tree, so two identical trees always
//! produce byte-identical scripts.

use core::fmt;
use core::fmt::Write as _;

use crate::MacroNode;

/// Serialized macro ready to hand to the interpreter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Script(String);

impl Script {
    /// Serializes a list of nodes as if they were one sequence.
    pub fn compile_steps(steps: &[MacroNode]) -> Self {
        let mut out = String::new();
        for step in steps {
            write_node(&mut out, step);
        }
        Script(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn write_node(out: &mut String, node: &MacroNode) {
    // Writing into a String cannot fail.
    let _ = match node {
        MacroNode::Attack => write!(out, "attack;"),
        MacroNode::UseSkill(skill) => write!(out, "skill {skill};"),
        MacroNode::UseItem(item) => write!(out, "use {item};"),
        MacroNode::UseItemPair(first, second) => write!(out, "use {first}, {second};"),
        MacroNode::Pickpocket => write!(out, "pickpocket;"),
        MacroNode::Repeat => write!(out, "repeat;"),
        MacroNode::Abort => write!(out, "abort;"),
        MacroNode::Sequence(children) => {
            for child in children {
                write_node(out, child);
            }
            Ok(())
        }
        MacroNode::Loop { guard, body } => {
            let _ = write!(out, "while {guard};");
            write_node(out, body);
            write!(out, "endwhile;")
        }
        MacroNode::Conditional { guard, then } => {
            let _ = write!(out, "if {guard};");
            write_node(out, then);
            write!(out, "endif;")
        }
    };
}
