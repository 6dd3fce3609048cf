//! Field Validator for entity drafts.
//!
//! # Responsibility
//! - Check every draft field against its declared `FieldRule`.
//! - Report all failures at once so each field can show its message.
//!
//! # Invariants
//! - Validation is pure and never logs.
//! - Date checks are format-only; `2025-13-40` passes.
//! - Empty input is `Required`, never confused with a numeric zero.

use crate::schema::{strip_currency, Draft, Entity, FieldRule, FieldSpec, ZeroPolicy};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));
static YEAR_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("valid year-month regex"));
static TIME_OF_DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0?[1-9]|1[0-2]):[0-5][0-9] (AM|PM)$").expect("valid time regex")
});
static WHOLE_DOLLARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("valid whole-dollar regex"));
static HOURS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d+)?h$").expect("valid hours regex"));

/// Field-level error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Required,
    InvalidFormat,
    InvalidValue,
    InvalidRange,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidFormat => "invalid_format",
            Self::InvalidValue => "invalid_value",
            Self::InvalidRange => "invalid_range",
        }
    }
}

/// One inline error shown next to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Field name to error map; empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<&'static str, FieldError>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error; the first error reported for a field wins.
    pub fn insert(&mut self, field: &'static str, error: FieldError) {
        self.errors.entry(field).or_insert(error);
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Error kind for `field`, if any.
    pub fn kind(&self, field: &str) -> Option<ErrorKind> {
        self.get(field).map(|error| error.kind)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Failing field names in key order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}

/// Validates a draft against the entity's schema and cross-field rules.
pub fn validate<T: Entity>(draft: &Draft) -> ErrorMap {
    let mut errors = validate_fields(T::fields(), draft);
    T::validate_record(draft, &mut errors);
    errors
}

/// Validates each declared field independently.
pub fn validate_fields(fields: &[FieldSpec], draft: &Draft) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for spec in fields {
        if let Some(error) = check_field(spec, draft.get(spec.name)) {
            errors.insert(spec.name, error);
        }
    }
    errors
}

/// Checks one raw input value against its field declaration.
pub fn check_field(spec: &FieldSpec, raw: &str) -> Option<FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return spec
            .required
            .then(|| FieldError::new(ErrorKind::Required, format!("{} is required", spec.label)));
    }

    match spec.rule {
        FieldRule::Text => None,
        FieldRule::Email => (!EMAIL_RE.is_match(value))
            .then(|| FieldError::new(ErrorKind::InvalidFormat, "Invalid email format")),
        FieldRule::Date => (!DATE_RE.is_match(value)).then(|| {
            FieldError::new(ErrorKind::InvalidFormat, "Invalid date format (YYYY-MM-DD)")
        }),
        FieldRule::YearMonth => (!YEAR_MONTH_RE.is_match(value)).then(|| {
            FieldError::new(
                ErrorKind::InvalidFormat,
                format!("Invalid {} format (YYYY-MM)", spec.label.to_lowercase()),
            )
        }),
        FieldRule::TimeOfDay(example) => (!TIME_OF_DAY_RE.is_match(value)).then(|| {
            FieldError::new(
                ErrorKind::InvalidFormat,
                format!("Invalid time format (e.g., {example})"),
            )
        }),
        FieldRule::PositiveId => check_positive_id(spec, value),
        FieldRule::Money(zero) => check_money(spec, value, zero),
        FieldRule::WholeDollars => (!is_whole_dollars(value)).then(|| {
            FieldError::new(
                ErrorKind::InvalidValue,
                format!("{} must be a valid number", spec.label),
            )
        }),
        FieldRule::Hours => (!HOURS_RE.is_match(value)).then(|| {
            FieldError::new(ErrorKind::InvalidFormat, "Invalid format (e.g., 8h or 7.5h)")
        }),
        FieldRule::Select(options) => (!options.contains(&value)).then(|| {
            FieldError::new(
                ErrorKind::InvalidValue,
                format!("{} must be one of: {}", spec.label, options.join(", ")),
            )
        }),
    }
}

/// Digits only, and small enough to store.
fn is_whole_dollars(value: &str) -> bool {
    WHOLE_DOLLARS_RE.is_match(value) && strip_currency(value).parse::<u64>().is_ok()
}

fn check_positive_id(spec: &FieldSpec, value: &str) -> Option<FieldError> {
    match value.parse::<i64>() {
        Ok(0) => Some(FieldError::new(
            ErrorKind::Required,
            format!("{} is required", spec.label),
        )),
        Ok(id) if id > 0 => None,
        _ => Some(FieldError::new(
            ErrorKind::InvalidValue,
            format!("{} must be a positive number", spec.label),
        )),
    }
}

fn check_money(spec: &FieldSpec, value: &str, zero: ZeroPolicy) -> Option<FieldError> {
    let amount = match crate::schema::draft::parse_amount(value) {
        Some(amount) if amount >= 0.0 => amount,
        _ => {
            return Some(FieldError::new(
                ErrorKind::InvalidValue,
                format!("{} must be a non-negative number", spec.label),
            ))
        }
    };

    if amount == 0.0 && zero == ZeroPolicy::Rejected {
        return Some(FieldError::new(
            ErrorKind::InvalidValue,
            format!("{} must be greater than zero", spec.label),
        ));
    }
    None
}

/// Flags `end` earlier than `start` as `InvalidRange` on `end_field`.
///
/// Skipped unless both dates are present and passed their own format check.
pub fn check_date_order(
    draft: &Draft,
    start_field: &'static str,
    end_field: &'static str,
    errors: &mut ErrorMap,
) {
    if errors.contains(start_field) || errors.contains(end_field) {
        return;
    }
    let start = draft.get(start_field).trim();
    let end = draft.get(end_field).trim();
    if !DATE_RE.is_match(start) || !DATE_RE.is_match(end) {
        return;
    }
    if end < start {
        errors.insert(
            end_field,
            FieldError::new(
                ErrorKind::InvalidRange,
                "End Date must not be earlier than Start Date",
            ),
        );
    }
}
