//! Free-form entry parsing
//!
//! Builds an [`IncomeRecord`] from one line of user text in which the date,
//! quoted source, amount and payment tag may appear in any order.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::income::{IncomeKind, IncomeRecord};
use crate::error::{LedgerError, LedgerResult};

const DATE_PATTERN: &str = r"[0-9]{4}\.[0-9]{2}\.[0-9]{2}";
const SOURCE_PATTERN: &str = r#"["']([^"']+)["']"#;
const AMOUNT_PATTERN: &str = r"\b[0-9]+\b";
const KIND_PATTERN: &str = r"\b(?:physical|digital)\b";

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| compile(DATE_PATTERN));
static SOURCE_RE: LazyLock<Regex> = LazyLock::new(|| compile(SOURCE_PATTERN));
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| compile(AMOUNT_PATTERN));
static KIND_RE: LazyLock<Regex> = LazyLock::new(|| compile(KIND_PATTERN));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

/// Parse a free-form entry such as `"Фриланс" 2024.05.22 physical 50000`.
///
/// Each field is searched for independently:
/// - the first `YYYY.MM.DD` run is the date (empty if absent)
/// - the first span quoted with `"` or `'` is the source (empty if absent)
/// - the first standalone digit run outside the date and source is the amount (0 if absent)
/// - the first `physical` / `digital` word outside the source is the kind (`Generic` if absent)
///
/// # Errors
///
/// Returns [`LedgerError::Parse`] if the amount does not fit in a `u64`.
pub fn parse_entry(input: &str) -> LedgerResult<IncomeRecord> {
    let date = DATE_RE.find(input);
    let source = SOURCE_RE.captures(input);

    let claimed: Vec<Range<usize>> = date
        .iter()
        .map(|m| m.range())
        .chain(source.iter().filter_map(|c| c.get(0)).map(|m| m.range()))
        .collect();
    let is_free = |range: Range<usize>| {
        !claimed
            .iter()
            .any(|c| range.start < c.end && c.start < range.end)
    };

    let amount = match AMOUNT_RE.find_iter(input).find(|m| is_free(m.range())) {
        Some(m) => m
            .as_str()
            .parse::<u64>()
            .map_err(|_| LedgerError::invalid_amount(m.as_str()))?,
        None => 0,
    };

    let kind = KIND_RE
        .find_iter(input)
        .find(|m| is_free(m.range()))
        .map_or(IncomeKind::Generic, |m| IncomeKind::from_tag(m.as_str()));

    Ok(IncomeRecord::new(
        date.map_or("", |m| m.as_str()),
        source
            .as_ref()
            .and_then(|c| c.get(1))
            .map_or("", |m| m.as_str()),
        amount,
        kind,
    ))
}
