//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod analyze;
mod inspect;

pub use analyze::{analyze_inputs, exit_code_for, run_analyze};
pub use inspect::{run_decode_state, run_parse};
