//! Interactive numbered menu
//!
//! Reads choices line by line until `5` or end of input. Errors from a single
//! action are reported and the loop continues; only failures to write the
//! output end the session.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use super::records::{add_from_text, clear, delete_position, list, INVALID_INDEX_MESSAGE};
use crate::error::LedgerResult;
use crate::storage::IncomeStore;

const MENU: &str = "\n==== МЕНЮ ====\n\
                    1. Добавить новую запись\n\
                    2. Показать все записи\n\
                    3. Удалить все записи\n\
                    4. Удалить конкретную запись\n\
                    5. Выход\n\
                    Выберите пункт: ";

const ADD_PROMPT: &str =
    "Введите данные (в любом порядке, например: \"Фриланс\" 2024.05.22 physical 50000):";
const DELETE_PROMPT: &str = "Введите номер для удаления: ";
const INVALID_CHOICE_MESSAGE: &str = "Неверный выбор. Повторите.";
const EXIT_MESSAGE: &str = "Выход из программы.";

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    ShowAll,
    DeleteAll,
    DeleteOne,
    Exit,
}

impl MenuChoice {
    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::ShowAll),
            "3" => Some(Self::DeleteAll),
            "4" => Some(Self::DeleteOne),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the menu against `input` and `output` until the user exits
pub fn run_menu<R, W>(
    store: &mut IncomeStore,
    currency: &str,
    mut input: R,
    output: &mut W,
) -> LedgerResult<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", MENU)?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            debug!("End of input, leaving menu");
            writeln!(output)?;
            return Ok(());
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(output, "{}", INVALID_CHOICE_MESSAGE)?;
            continue;
        };

        let result = match choice {
            MenuChoice::Add => {
                writeln!(output, "{}", ADD_PROMPT)?;
                output.flush()?;
                match read_line(&mut input)? {
                    Some(text) => add_from_text(store, &text, output),
                    None => Ok(()),
                }
            }
            MenuChoice::ShowAll => list(store, currency, output),
            MenuChoice::DeleteAll => clear(store, output),
            MenuChoice::DeleteOne => delete_one(store, currency, &mut input, output),
            MenuChoice::Exit => {
                writeln!(output, "{}", EXIT_MESSAGE)?;
                return Ok(());
            }
        };

        if let Err(e) = result {
            warn!(error = %e, ?choice, "Menu action failed");
            writeln!(output, "Ошибка: {}", e)?;
        }
    }
}

fn delete_one<R: BufRead, W: Write>(
    store: &mut IncomeStore,
    currency: &str,
    input: &mut R,
    output: &mut W,
) -> LedgerResult<()> {
    write!(output, "{}", store.show_deletable(currency))?;
    if store.is_empty() {
        return Ok(());
    }

    write!(output, "{}", DELETE_PROMPT)?;
    output.flush()?;

    let Some(line) = read_line(input)? else {
        return Ok(());
    };

    match line.trim().parse::<i64>() {
        Ok(position) => delete_position(store, position, output),
        Err(_) => {
            writeln!(output, "{}", INVALID_INDEX_MESSAGE)?;
            Ok(())
        }
    }
}

/// Read one line without its terminator; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> LedgerResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncomeKind;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(store: &mut IncomeStore, script: &str) -> String {
        let mut output = Vec::new();
        run_menu(store, "руб.", Cursor::new(script.to_string()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn create_test_store() -> (TempDir, IncomeStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = IncomeStore::open(temp_dir.path().join("income.txt")).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("abc"), None);
    }

    #[test]
    fn test_exit_immediately() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run(&mut store, "5\n");
        assert!(output.contains("==== МЕНЮ ===="));
        assert!(output.ends_with("Выход из программы.\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run(&mut store, "");
        assert!(output.contains("Выберите пункт: "));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run(&mut store, "9\nfoo\n5\n");
        assert_eq!(output.matches("Неверный выбор. Повторите.").count(), 2);
        assert_eq!(output.matches("==== МЕНЮ ====").count(), 3);
    }

    #[test]
    fn test_add_then_show() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run(&mut store, "1\n\"Фриланс\" 2024.05.22 physical 50000\n2\n5\n");

        assert!(output.contains("Запись добавлена."));
        assert!(output
            .contains("1) Дата: 2024.05.22, Источник: Фриланс, Сумма: 50000 руб., Тип: Наличные"));
        assert_eq!(store.records()[0].kind, IncomeKind::Physical);
    }

    #[test]
    fn test_delete_one_by_number() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run(&mut store, "1\n'A' 1\n1\n'B' 2\n4\n1\n5\n");

        assert!(output.contains("Выберите запись для удаления:"));
        assert!(output.contains("Запись удалена."));
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].source, "B");
    }

    #[test]
    fn test_delete_one_rejects_bad_numbers() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run(&mut store, "1\n'A' 1\n4\n0\n4\n-1\n4\nx\n4\n2\n5\n");

        assert_eq!(output.matches("Неверный номер.").count(), 4);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_one_on_empty_store() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run(&mut store, "4\n5\n");

        assert!(output.contains("Список пуст."));
        assert!(!output.contains("Введите номер для удаления"));
    }

    #[test]
    fn test_delete_all() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run(&mut store, "1\n'A' 1\n3\n2\n5\n");

        assert!(output.contains("Все записи удалены."));
        assert!(output.contains("Записей нет."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_action_does_not_end_session() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run(&mut store, "1\n'Big' 99999999999999999999999\n2\n5\n");

        assert!(output.contains("Ошибка: Parse error"));
        assert!(output.contains("Записей нет."));
        assert!(output.ends_with("Выход из программы.\n"));
    }
}
