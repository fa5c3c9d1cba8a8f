//! Priority-ordered combat macros for turn-based encounters.
//!
//! This library models the response program an agent hands to an external
//! script interpreter before an encounter starts. The program is a tree of
//! [`MacroNode`]s built with [`Macro`] and serialized to a flat [`Script`].
//!
//! - **Compile-time pruning**: steps the actor cannot perform are never emitted
//! - **Live guards**: encounter-time facts stay as [`Condition`] data
//! - **Deterministic output**: identical trees serialize to identical bytes
//! - **Zero dependencies**: pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`MacroNode`]: tagged node variants (attack, skill, item, conditional, loop, ...)
//! - [`Condition`]: guard expressions evaluated by the interpreter
//! - [`Macro`]: chainable builder producing a sequence
//! - [`Script`]: serialized instruction text

pub mod condition;
pub mod node;
pub mod program;
pub mod script;

pub use condition::Condition;
pub use node::MacroNode;
pub use program::Macro;
pub use script::Script;
