//! Income record model
//!
//! One income event: a date, a source label, a whole amount and the way the
//! money was received. The record's `Display` output is also its line format
//! in the backing file.

use std::fmt;

use crate::error::{LedgerError, LedgerResult};

/// How an income event was received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IncomeKind {
    /// No payment method recorded
    #[default]
    Generic,
    /// Cash in hand
    Physical,
    /// Card, transfer or any other non-cash payment
    Digital,
}

impl IncomeKind {
    /// Map a persisted tag to a kind; unknown or empty tags are `Generic`
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "physical" => Self::Physical,
            "digital" => Self::Digital,
            _ => Self::Generic,
        }
    }

    /// Trailing tag written to the backing file
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Generic => None,
            Self::Physical => Some("physical"),
            Self::Digital => Some("digital"),
        }
    }

    /// Payment method label shown to the user
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Generic => None,
            Self::Physical => Some("Наличные"),
            Self::Digital => Some("Цифровые"),
        }
    }
}

/// A single income entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeRecord {
    /// Date in `YYYY.MM.DD` form, kept as entered
    pub date: String,

    /// Where the money came from
    pub source: String,

    /// Amount in whole currency units
    pub amount: u64,

    pub kind: IncomeKind,
}

impl IncomeRecord {
    /// Create a new income record
    pub fn new(
        date: impl Into<String>,
        source: impl Into<String>,
        amount: u64,
        kind: IncomeKind,
    ) -> Self {
        Self {
            date: date.into(),
            source: source.into(),
            amount,
            kind,
        }
    }

    /// Encode the record as a line of the backing file (without terminator)
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Decode one persisted line.
    ///
    /// The line is expected to look like `<date> "<source>" <amount>[ <tag>]`.
    /// Lines that do not match this shape yield whatever fields could be read:
    /// without quotes the source is empty and the amount defaults to 0.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Parse`] if the amount token is present but is not
    /// a non-negative whole number.
    pub fn decode(line: &str) -> LedgerResult<Self> {
        let line = line.trim_start();
        // A record without a date encodes with a leading quote
        let (date, rest) = if line.starts_with('"') {
            ("", line)
        } else {
            split_token(line)
        };

        let (source, rest) = match rest.split_once('"') {
            Some((_, quoted)) => quoted.split_once('"').unwrap_or((quoted, "")),
            None => ("", ""),
        };

        let mut tokens = rest.split_whitespace();
        let amount = match tokens.next() {
            Some(token) => token
                .parse::<u64>()
                .map_err(|_| LedgerError::invalid_amount(token))?,
            None => 0,
        };
        let kind = tokens.next().map(IncomeKind::from_tag).unwrap_or_default();

        Ok(Self::new(date, source, amount, kind))
    }
}

impl fmt::Display for IncomeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\" {}", self.date, self.source, self.amount)?;
        if let Some(tag) = self.kind.tag() {
            write!(f, " {}", tag)?;
        }
        Ok(())
    }
}

/// Split off the first whitespace-delimited token
fn split_token(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], &s[end..]),
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_generic_has_no_tag() {
        let record = IncomeRecord::new("2024.05.22", "Фриланс", 50000, IncomeKind::Generic);
        assert_eq!(record.encode(), "2024.05.22 \"Фриланс\" 50000");
    }

    #[test]
    fn test_encode_tagged_kinds() {
        let physical = IncomeRecord::new("2024.05.22", "Фриланс", 50000, IncomeKind::Physical);
        let digital = IncomeRecord::new("2024.06.01", "Зарплата", 80000, IncomeKind::Digital);

        assert_eq!(physical.encode(), "2024.05.22 \"Фриланс\" 50000 physical");
        assert_eq!(digital.encode(), "2024.06.01 \"Зарплата\" 80000 digital");
    }

    #[test]
    fn test_decode_physical_line() {
        let record = IncomeRecord::decode("2024.05.22 \"Фриланс\" 50000 physical").unwrap();

        assert_eq!(record.date, "2024.05.22");
        assert_eq!(record.source, "Фриланс");
        assert_eq!(record.amount, 50000);
        assert_eq!(record.kind, IncomeKind::Physical);
    }

    #[test]
    fn test_decode_source_with_spaces() {
        let record = IncomeRecord::decode("2024.07.01 \"Продажа старого велосипеда\" 12000").unwrap();

        assert_eq!(record.source, "Продажа старого велосипеда");
        assert_eq!(record.amount, 12000);
        assert_eq!(record.kind, IncomeKind::Generic);
    }

    #[test]
    fn test_decode_unknown_tag_is_generic() {
        let record = IncomeRecord::decode("2024.07.01 \"Кэшбэк\" 300 crypto").unwrap();
        assert_eq!(record.kind, IncomeKind::Generic);
    }

    #[test]
    fn test_round_trip_all_kinds() {
        for kind in [IncomeKind::Generic, IncomeKind::Physical, IncomeKind::Digital] {
            let record = IncomeRecord::new("2025.01.15", "Premium bonus", 7, kind);
            let decoded = IncomeRecord::decode(&record.encode()).unwrap();
            assert_eq!(decoded, record);
        }
    }

    #[test]
    fn test_round_trip_entry_edge_cases() {
        let records = [
            IncomeRecord::new("", "Фриланс", 50000, IncomeKind::Physical),
            IncomeRecord::new("", "Подарок", 0, IncomeKind::Generic),
            IncomeRecord::new("2024.05.22", "  Кафе у дома  ", 1200, IncomeKind::Digital),
            IncomeRecord::new("2024.05.22", "Mike's shop", 300, IncomeKind::Generic),
            IncomeRecord::new("2024.05.22", "Проект 42", 9000, IncomeKind::Physical),
        ];

        for record in records {
            let decoded = IncomeRecord::decode(&record.encode()).unwrap();
            assert_eq!(decoded, record, "{}", record.encode());
        }
    }

    #[test]
    fn test_decode_dateless_line() {
        let record = IncomeRecord::decode(" \"Фриланс\" 50000 physical").unwrap();

        assert_eq!(record.date, "");
        assert_eq!(record.source, "Фриланс");
        assert_eq!(record.amount, 50000);
        assert_eq!(record.kind, IncomeKind::Physical);
    }

    #[test]
    fn test_decode_without_quotes_is_partial() {
        let record = IncomeRecord::decode("2024.05.22 Фриланс 50000 physical").unwrap();

        assert_eq!(record.date, "2024.05.22");
        assert_eq!(record.source, "");
        assert_eq!(record.amount, 0);
        assert_eq!(record.kind, IncomeKind::Generic);
    }

    #[test]
    fn test_decode_unterminated_quote_takes_rest_as_source() {
        let record = IncomeRecord::decode("2024.05.22 \"Фриланс 50000").unwrap();

        assert_eq!(record.source, "Фриланс 50000");
        assert_eq!(record.amount, 0);
    }

    #[test]
    fn test_decode_missing_amount_defaults_to_zero() {
        let record = IncomeRecord::decode("2024.05.22 \"Фриланс\"").unwrap();
        assert_eq!(record.amount, 0);
        assert_eq!(record.kind, IncomeKind::Generic);
    }

    #[test]
    fn test_decode_non_numeric_amount_fails() {
        let result = IncomeRecord::decode("2024.05.22 \"Фриланс\" lots physical");
        assert!(matches!(result, Err(LedgerError::Parse(_))));
    }

    #[test]
    fn test_decode_negative_amount_fails() {
        let result = IncomeRecord::decode("2024.05.22 \"Возврат\" -100");
        assert!(result.is_err());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(IncomeKind::Generic.label(), None);
        assert_eq!(IncomeKind::Physical.label(), Some("Наличные"));
        assert_eq!(IncomeKind::Digital.label(), Some("Цифровые"));
    }
}
