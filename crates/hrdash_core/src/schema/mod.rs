//! Entity schemas driving forms, grids and detail views.
//!
//! # Responsibility
//! - Declare each entity's fields, columns and coercion rules once.
//! - Define the `Entity` contract the generic record manager is built on.
//!
//! # Invariants
//! - Every field a form can edit is declared in `Entity::fields()`.
//! - `from_draft` only runs on drafts that passed validation.

pub mod draft;
pub mod field;

use crate::model::status::StatusVocabulary;
use crate::model::RecordId;
use crate::validation::ErrorMap;
use std::cmp::Ordering;
use std::fmt::Debug;

pub use draft::{
    format_currency, format_hours, format_money, strip_currency, CoerceError, CoerceResult, Draft,
};
pub use field::{find_field, ColumnSpec, FieldRule, FieldSpec, ZeroPolicy, ACTIONS_COLUMN};

/// Comparable cell value used for client-side sorting.
///
/// Dates are carried as `Text`: the `YYYY-MM-DD` and `YYYY-MM` formats order
/// lexicographically in calendar order.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
}

impl SortValue {
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => left.cmp(right),
            (Self::Number(left), Self::Number(right)) => {
                left.partial_cmp(right).unwrap_or(Ordering::Equal)
            }
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

/// Flat domain record managed by a generic record manager.
pub trait Entity: Clone + Debug + PartialEq + 'static {
    /// Closed status vocabulary of this entity.
    type Status: StatusVocabulary;

    /// Stable domain name used in log events.
    const DOMAIN: &'static str;

    /// Form fields in display order.
    fn fields() -> &'static [FieldSpec];

    /// Grid columns in display order, including the actions column.
    fn columns() -> &'static [ColumnSpec];

    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);

    fn status(&self) -> Self::Status;

    /// Seeds an edit draft, converting typed values back to editable text.
    fn to_draft(&self) -> Draft;

    /// Builds a record from a validated draft.
    ///
    /// The returned id is a placeholder; the store or the edit mode assigns
    /// the real one.
    fn from_draft(draft: &Draft) -> CoerceResult<Self>;

    /// Cross-field rules run after per-field validation.
    fn validate_record(_draft: &Draft, _errors: &mut ErrorMap) {}

    /// Sort key for a grid column, `None` for unknown columns.
    fn sort_value(&self, column: &str) -> Option<SortValue>;

    /// Display text for a field or column key, `None` for unknown keys.
    fn display_value(&self, key: &str) -> Option<String>;
}
