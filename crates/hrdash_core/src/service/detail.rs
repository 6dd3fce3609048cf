//! Read-only Detail View for one record.

use crate::model::status::{classify_status, Severity, StatusVocabulary};
use crate::schema::Entity;

/// Colour-coded status chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    /// `None` renders the default (uncoloured) chip.
    pub severity: Option<Severity>,
}

impl StatusBadge {
    /// Badge for a domain status through the shared classifier.
    pub fn for_status<S: StatusVocabulary>(status: S) -> Self {
        Self {
            label: status.as_str(),
            severity: classify_status(status.as_str(), S::severity_map()),
        }
    }
}

/// One labelled value line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Holds the record currently shown read-only, if any.
#[derive(Debug, Clone)]
pub struct DetailView<T> {
    record: Option<T>,
}

impl<T: Entity> DetailView<T> {
    pub fn new() -> Self {
        Self { record: None }
    }

    pub fn open(&mut self, record: T) {
        self.record = Some(record);
    }

    pub fn close(&mut self) {
        self.record = None;
    }

    pub fn is_open(&self) -> bool {
        self.record.is_some()
    }

    pub fn record(&self) -> Option<&T> {
        self.record.as_ref()
    }

    /// Field lines in schema order; empty when closed.
    pub fn fields(&self) -> Vec<DetailField> {
        let Some(record) = self.record.as_ref() else {
            return Vec::new();
        };
        T::fields()
            .iter()
            .filter_map(|spec| {
                record.display_value(spec.name).map(|value| DetailField {
                    label: spec.label,
                    value,
                })
            })
            .collect()
    }

    pub fn badge(&self) -> Option<StatusBadge> {
        self.record
            .as_ref()
            .map(|record| StatusBadge::for_status(record.status()))
    }
}

impl<T: Entity> Default for DetailView<T> {
    fn default() -> Self {
        Self::new()
    }
}
