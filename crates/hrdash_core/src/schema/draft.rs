//! Editable, not-yet-committed record values.
//!
//! # Responsibility
//! - Hold form input as text keyed by schema field name.
//! - Coerce validated text into typed record values.
//!
//! # Invariants
//! - Drafts never hold a record id; the form mode carries it.
//! - An absent key reads as empty input, never as zero.

use crate::model::status::StatusVocabulary;
use crate::schema::field::FieldSpec;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Coercion failure for a draft value that bypassed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoerceError {
    pub field: &'static str,
    pub expected: &'static str,
}

impl Display for CoerceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "draft field `{}` cannot be read as {}",
            self.field, self.expected
        )
    }
}

impl Error for CoerceError {}

pub type CoerceResult<T> = Result<T, CoerceError>;

/// Text values of one form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    values: BTreeMap<&'static str, String>,
}

impl Draft {
    /// Empty draft with no keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create-mode draft seeded with each field's default.
    pub fn from_defaults(fields: &'static [FieldSpec]) -> Self {
        let values = fields
            .iter()
            .map(|spec| (spec.name, spec.default.to_string()))
            .collect();
        Self { values }
    }

    /// Raw input for `field`, or `""` when untouched.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: &'static str, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Builder form of [`Draft::set`], used when seeding edit drafts.
    pub fn with(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.values
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }

    /// Trimmed text value.
    pub fn text(&self, field: &'static str) -> String {
        self.get(field).trim().to_string()
    }

    /// Integer value; used for ids.
    pub fn integer(&self, field: &'static str) -> CoerceResult<i64> {
        self.get(field)
            .trim()
            .parse::<i64>()
            .map_err(|_| CoerceError {
                field,
                expected: "an integer",
            })
    }

    /// Finite decimal amount.
    pub fn amount(&self, field: &'static str) -> CoerceResult<f64> {
        parse_amount(self.get(field)).ok_or(CoerceError {
            field,
            expected: "a decimal amount",
        })
    }

    /// Whole-dollar amount, tolerating a `$` prefix and thousands separators.
    pub fn whole_dollars(&self, field: &'static str) -> CoerceResult<u64> {
        strip_currency(self.get(field))
            .parse::<u64>()
            .map_err(|_| CoerceError {
                field,
                expected: "a whole-dollar amount",
            })
    }

    /// Hours written as `<number>h`.
    pub fn hours(&self, field: &'static str) -> CoerceResult<f64> {
        let raw = self.get(field).trim();
        raw.strip_suffix('h')
            .and_then(parse_amount)
            .ok_or(CoerceError {
                field,
                expected: "hours such as `8h`",
            })
    }

    /// Status value from its select-list label.
    pub fn status<S: StatusVocabulary>(&self, field: &'static str) -> CoerceResult<S> {
        S::parse(self.get(field)).ok_or(CoerceError {
            field,
            expected: "a listed status",
        })
    }
}

/// Parses a finite decimal; rejects NaN and infinities.
pub(crate) fn parse_amount(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

/// Removes `$`, `,` and surrounding whitespace from a currency string.
pub fn strip_currency(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|ch| *ch != '$' && *ch != ',')
        .collect()
}

/// Formats whole dollars as `$85,000`.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a decimal amount as `$5,000` or `$1,234.5`.
///
/// Rounded to cents; trailing zero cents are dropped.
pub fn format_money(amount: f64) -> String {
    // `as` saturates, so huge or NaN amounts cannot wrap.
    let cents = (amount.abs() * 100.0).round() as u64;
    let mut text = format_currency(cents / 100);
    let fraction = cents % 100;
    if fraction != 0 {
        text.push('.');
        text.push_str(format!("{fraction:02}").trim_end_matches('0'));
    }
    if amount.is_sign_negative() && cents != 0 {
        text.insert(0, '-');
    }
    text
}

/// Formats an hours amount as `8h` / `7.5h`.
pub fn format_hours(hours: f64) -> String {
    format!("{hours}h")
}

#[cfg(test)]
mod tests {
    use super::{format_currency, format_hours, format_money, strip_currency, Draft};

    #[test]
    fn untouched_field_reads_empty() {
        let draft = Draft::new();
        assert_eq!(draft.get("grossPay"), "");
        assert!(draft.amount("grossPay").is_err());
    }

    #[test]
    fn currency_round_trips_through_strip_and_format() {
        assert_eq!(strip_currency("$85,000"), "85000");
        assert_eq!(strip_currency(" $1,110,000 "), "1110000");
        assert_eq!(format_currency(85_000), "$85,000");
        assert_eq!(format_currency(110_000), "$110,000");
        assert_eq!(format_currency(1_110_000), "$1,110,000");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(0), "$0");
    }

    #[test]
    fn money_groups_thousands_and_trims_cents() {
        assert_eq!(format_money(5000.0), "$5,000");
        assert_eq!(format_money(3650.0), "$3,650");
        assert_eq!(format_money(1234.5), "$1,234.5");
        assert_eq!(format_money(1234.05), "$1,234.05");
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(-1200.0), "-$1,200");
    }

    #[test]
    fn hours_parse_and_format() {
        let draft = Draft::new().with("hoursWorked", "7.5h");
        assert_eq!(draft.hours("hoursWorked").unwrap(), 7.5);
        assert_eq!(format_hours(8.0), "8h");
        assert_eq!(format_hours(7.5), "7.5h");
    }

    #[test]
    fn amount_rejects_non_finite_values() {
        let draft = Draft::new().with("netPay", "NaN").with("deductions", "inf");
        assert!(draft.amount("netPay").is_err());
        assert!(draft.amount("deductions").is_err());
    }
}
