//! Ports the decision core drives the host through.
//!
//! The runtime never touches the game directly. Each cycle it reads the world
//! through [`WorldQuery`](agent_core::WorldQuery) and acts through the ports
//! defined here; a [`Host`] bundles them so tasks can be handed one value.
mod ports;

pub use agent_core::{AgentError, ErrorSeverity, Result};
pub use ports::{ActionPort, ChoiceMap, EquipmentPort, Host, Outcome, ScriptInterpreter};
