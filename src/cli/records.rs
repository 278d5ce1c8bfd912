//! Record CLI commands
//!
//! Implements the add/list/clear/delete commands. The interactive menu uses the
//! same handlers, so both surfaces print identical messages.

use std::io::Write;

use clap::Subcommand;
use tracing::warn;

use crate::error::LedgerResult;
use crate::models::parse_entry;
use crate::storage::IncomeStore;

pub const ADDED_MESSAGE: &str = "Запись добавлена.";
pub const CLEARED_MESSAGE: &str = "Все записи удалены.";
pub const DELETED_MESSAGE: &str = "Запись удалена.";
pub const INVALID_INDEX_MESSAGE: &str = "Неверный номер.";

/// Record subcommands
#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// Add a record from free-form text, e.g. `"'Фриланс' 2024.05.22 physical 50000"`
    Add {
        /// Date (YYYY.MM.DD), quoted source, amount and optional physical/digital tag, in any order
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// List all records
    #[command(alias = "ls")]
    List,
    /// Delete all records
    Clear,
    /// Delete one record by its number in the list
    #[command(alias = "rm")]
    Delete {
        /// 1-based record number
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
}

/// Handle a record command
pub fn handle_record_command(
    store: &mut IncomeStore,
    currency: &str,
    cmd: RecordCommands,
    out: &mut impl Write,
) -> LedgerResult<()> {
    match cmd {
        RecordCommands::Add { text } => add_from_text(store, &text.join(" "), out),
        RecordCommands::List => list(store, currency, out),
        RecordCommands::Clear => clear(store, out),
        RecordCommands::Delete { number } => delete_position(store, number, out),
    }
}

/// Parse a free-form entry and append it to the store
pub fn add_from_text(store: &mut IncomeStore, text: &str, out: &mut impl Write) -> LedgerResult<()> {
    let record = parse_entry(text)?;
    if record.source.is_empty() {
        warn!(input = text, "No quoted source found in entry");
    }

    store.add(record)?;
    writeln!(out, "{}", ADDED_MESSAGE)?;
    Ok(())
}

pub fn list(store: &IncomeStore, currency: &str, out: &mut impl Write) -> LedgerResult<()> {
    write!(out, "{}", store.display_all(currency))?;
    Ok(())
}

pub fn clear(store: &mut IncomeStore, out: &mut impl Write) -> LedgerResult<()> {
    store.delete_all()?;
    writeln!(out, "{}", CLEARED_MESSAGE)?;
    Ok(())
}

/// Delete the record at a 1-based `position`
pub fn delete_position(
    store: &mut IncomeStore,
    position: i64,
    out: &mut impl Write,
) -> LedgerResult<()> {
    let removed = match position_to_index(position) {
        Some(index) => store.delete_by_index(index)?,
        None => None,
    };

    let message = if removed.is_some() {
        DELETED_MESSAGE
    } else {
        INVALID_INDEX_MESSAGE
    };
    writeln!(out, "{}", message)?;
    Ok(())
}

/// Convert a 1-based position to a 0-based index; zero and negatives have none
pub fn position_to_index(position: i64) -> Option<usize> {
    position
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
}
