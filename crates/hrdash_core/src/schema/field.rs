//! Field and column declarations for entity schemas.

/// How a money field treats an explicit zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroPolicy {
    /// `0` is a legitimate value.
    Allowed,
    /// `0` is rejected with `InvalidValue`; empty input is still `Required`.
    Rejected,
}

/// Validation and coercion rule for one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Free text; only emptiness is checked.
    Text,
    /// `local@domain.tld`.
    Email,
    /// `YYYY-MM-DD`, format only.
    Date,
    /// `YYYY-MM`, used for pay periods.
    YearMonth,
    /// 12-hour clock, `H:MM AM` or `HH:MM PM`; carries the example time
    /// quoted in the error message.
    TimeOfDay(&'static str),
    /// Strictly positive integer id.
    PositiveId,
    /// Non-negative decimal amount.
    Money(ZeroPolicy),
    /// Whole-dollar amount typed as digits only.
    WholeDollars,
    /// Hours worked written as `<number>h`.
    Hours,
    /// One of a fixed option list.
    Select(&'static [&'static str]),
}

/// Declaration of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Draft key, matching the record's wire name.
    pub name: &'static str,
    /// Human-readable label used in messages and detail views.
    pub label: &'static str,
    pub rule: FieldRule,
    /// Empty input fails with `Required` when set.
    pub required: bool,
    /// Create-mode draft value.
    pub default: &'static str,
}

impl FieldSpec {
    /// Required field with an empty default.
    pub const fn required(name: &'static str, label: &'static str, rule: FieldRule) -> Self {
        Self {
            name,
            label,
            rule,
            required: true,
            default: "",
        }
    }

    /// Optional field; validated only when non-empty.
    pub const fn optional(name: &'static str, label: &'static str, rule: FieldRule) -> Self {
        Self {
            name,
            label,
            rule,
            required: false,
            default: "",
        }
    }

    /// Replaces the create-mode default.
    pub const fn with_default(self, default: &'static str) -> Self {
        Self { default, ..self }
    }

    /// Options offered by a select field.
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self.rule {
            FieldRule::Select(options) => Some(options),
            _ => None,
        }
    }
}

/// Declaration of one grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
}

impl ColumnSpec {
    pub const fn sortable(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
        }
    }

    pub const fn fixed(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
        }
    }
}

/// Row actions column shared by every grid.
pub const ACTIONS_COLUMN: ColumnSpec = ColumnSpec::fixed("actions", "Actions");

/// Looks up a field declaration by draft key.
pub fn find_field(fields: &'static [FieldSpec], name: &str) -> Option<&'static FieldSpec> {
    fields.iter().find(|spec| spec.name == name)
}
