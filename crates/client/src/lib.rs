//! Command-line client for the sortie decision core.
//!
//! The binary is the composition root: it resolves configuration, installs
//! logging, loads a world snapshot and drives [`runtime::Engine`] through the
//! in-memory [`DryRunHost`]. Nothing here talks to a live game.
pub mod config;
pub mod host;
pub mod logging;

pub use config::{ClientConfig, new_session_id};
pub use host::DryRunHost;
