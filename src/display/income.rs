//! Income record display formatting
//!
//! Formats records as numbered lines for the terminal.

use crate::models::IncomeRecord;

/// Shown by the full listing when there are no records
pub const EMPTY_LIST_MESSAGE: &str = "Записей нет.";

/// Shown by the delete prompt when there are no records
pub const NOTHING_TO_DELETE_MESSAGE: &str = "Список пуст.";

const DELETE_HEADER: &str = "Выберите запись для удаления:";

/// Format one record as a 1-indexed line; `index` is 0-based
pub fn format_income_row(index: usize, record: &IncomeRecord, currency: &str) -> String {
    let mut row = format!(
        "{}) Дата: {}, Источник: {}, Сумма: {} {}",
        index + 1,
        record.date,
        record.source,
        record.amount,
        currency
    );

    if let Some(label) = record.kind.label() {
        row.push_str(", Тип: ");
        row.push_str(label);
    }

    row
}

/// Format all records, one per line
pub fn format_income_list(records: &[IncomeRecord], currency: &str) -> String {
    if records.is_empty() {
        return format!("{}\n", EMPTY_LIST_MESSAGE);
    }

    let mut output = String::new();
    for (index, record) in records.iter().enumerate() {
        output.push_str(&format_income_row(index, record, currency));
        output.push('\n');
    }
    output
}

/// Format the list of records offered for deletion
pub fn format_deletable_list(records: &[IncomeRecord], currency: &str) -> String {
    if records.is_empty() {
        return format!("{}\n", NOTHING_TO_DELETE_MESSAGE);
    }

    format!("{}\n{}", DELETE_HEADER, format_income_list(records, currency))
}
