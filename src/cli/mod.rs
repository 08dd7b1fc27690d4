//! CLI command implementations
//!
//! This module contains all CLI command handlers, organized by category:
//! - `evaluate`: eval (one-shot) and form (interactive)
//! - `rules`: decision table listing
//! - `config`: configuration and schema commands
//! - `util`: shared argument helpers

pub mod config;
pub mod evaluate;
pub mod rules;
pub mod util;

// Re-export all command functions for convenient access
pub use config::{cmd_config, cmd_schema};
pub use evaluate::{cmd_eval, cmd_form};
pub use rules::cmd_rules;
