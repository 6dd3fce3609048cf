//! Status vocabularies and the shared status-severity classifier.
//!
//! # Responsibility
//! - Define the three-way severity bucket used for status badges.
//! - Provide one classifier shared by every domain vocabulary.
//!
//! # Invariants
//! - Every domain status maps to exactly one `Severity`.
//! - Status labels are the exact strings offered by the form select list.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Badge colour bucket for a status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Success-like status (green badge).
    Positive,
    /// Pending or in-review status (amber badge).
    Neutral,
    /// Rejected, failed or terminated status (red badge).
    Negative,
}

impl Severity {
    /// Stable string id used by renderers and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

/// Domain-specific mapping from status label to severity.
pub type SeverityMap = &'static [(&'static str, Severity)];

/// Classifies a status string against a domain map.
///
/// Matching ignores ASCII case and surrounding whitespace. Returns `None`
/// for labels the map does not know, which renderers show as a default
/// (uncoloured) badge.
pub fn classify_status(status: &str, map: SeverityMap) -> Option<Severity> {
    let needle = status.trim();
    map.iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(needle))
        .map(|(_, severity)| *severity)
}

/// Closed set of status values for one domain entity.
pub trait StatusVocabulary: Copy + Eq + Debug + 'static {
    /// All values in select-list order.
    fn all() -> &'static [Self];

    /// Display label, identical to the select-list option.
    fn as_str(self) -> &'static str;

    /// Label to severity map used by the shared classifier.
    fn severity_map() -> SeverityMap;

    /// Parses an exact select-list label.
    fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == trimmed)
    }

    /// Severity of this value through the shared classifier.
    fn severity(self) -> Severity {
        classify_status(self.as_str(), Self::severity_map()).unwrap_or(Severity::Neutral)
    }
}

/// Declares a domain status enum together with its labels and severities.
macro_rules! status_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $label:literal : $severity:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Select-list labels in declaration order.
            pub const LABELS: &'static [&'static str] = &[$($label),+];
        }

        impl $crate::model::status::StatusVocabulary for $name {
            fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            fn severity_map() -> $crate::model::status::SeverityMap {
                &[$(($label, $crate::model::status::Severity::$severity)),+]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::model::status::StatusVocabulary::as_str(*self))
            }
        }
    };
}

pub(crate) use status_vocabulary;
