//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the record store.

pub mod menu;
pub mod records;

pub use menu::run_menu;
pub use records::{handle_record_command, RecordCommands};
