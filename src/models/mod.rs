//! Core data models for the income ledger
//!
//! The income record, its payment kind and the free-form entry parser.

pub mod entry;
pub mod income;

pub use entry::parse_entry;
pub use income::{IncomeKind, IncomeRecord};
