//! Display formatting for terminal output
//!
//! Provides utilities for formatting income records for terminal display.

pub mod income;

pub use income::{format_deletable_list, format_income_list, format_income_row};
