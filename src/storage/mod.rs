//! Storage layer for the income ledger
//!
//! Plain text persistence: one encoded record per line, appended on add and
//! rewritten atomically on delete.

pub mod file_io;
pub mod income;

pub use file_io::{append_line, read_lines, truncate, write_lines_atomic};
pub use income::IncomeStore;
