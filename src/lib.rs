//! income-ledger - a terminal income journal
//!
//! Records dated income entries (source, amount, payment method) in a plain
//! text file, one entry per line, and lists or deletes them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The income record and the free-form entry parser
//! - `storage`: Text file storage and the record store
//! - `display`: Terminal formatting of records
//! - `cli`: Subcommand handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,no_run
//! use income_ledger::models::parse_entry;
//! use income_ledger::storage::IncomeStore;
//!
//! let mut store = IncomeStore::open("income.txt")?;
//! store.add(parse_entry("\"Фриланс\" 2024.05.22 physical 50000")?)?;
//! print!("{}", store.display_all("руб."));
//! # Ok::<(), income_ledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
