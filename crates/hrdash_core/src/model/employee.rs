//! Employee directory record.

use crate::model::status::{status_vocabulary, StatusVocabulary};
use crate::model::RecordId;
use crate::schema::{
    format_currency, ColumnSpec, CoerceResult, Draft, Entity, FieldRule, FieldSpec, SortValue,
    ACTIONS_COLUMN,
};
use serde::{Deserialize, Serialize};

status_vocabulary! {
    /// Employment status.
    EmployeeStatus {
        Active => "Active": Positive,
        OnLeave => "On Leave": Neutral,
        Terminated => "Terminated": Negative,
    }
}

/// Department select-list options.
pub const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Product",
    "Design",
    "Human Resources",
    "Marketing",
    "Analytics",
    "Sales",
    "Finance",
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Name", FieldRule::Text),
    FieldSpec::required("email", "Email", FieldRule::Email),
    FieldSpec::required("position", "Position", FieldRule::Text),
    FieldSpec::required("department", "Department", FieldRule::Select(DEPARTMENTS)),
    FieldSpec::required("joinDate", "Join Date", FieldRule::Date),
    FieldSpec::required("salary", "Salary", FieldRule::WholeDollars),
    FieldSpec::required("status", "Status", FieldRule::Select(EmployeeStatus::LABELS))
        .with_default("Active"),
];

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::sortable("name", "Employee"),
    ColumnSpec::sortable("position", "Position"),
    ColumnSpec::sortable("department", "Department"),
    ColumnSpec::sortable("joinDate", "Join Date"),
    ColumnSpec::sortable("salary", "Salary"),
    ColumnSpec::sortable("status", "Status"),
    ACTIONS_COLUMN,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    /// `YYYY-MM-DD`.
    pub join_date: String,
    /// Annual salary in whole dollars, rendered as `$85,000`.
    pub salary: u64,
    pub status: EmployeeStatus,
}

impl Entity for Employee {
    type Status = EmployeeStatus;

    const DOMAIN: &'static str = "employee";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn columns() -> &'static [ColumnSpec] {
        COLUMNS
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn status(&self) -> EmployeeStatus {
        self.status
    }

    fn to_draft(&self) -> Draft {
        Draft::new()
            .with("name", self.name.as_str())
            .with("email", self.email.as_str())
            .with("position", self.position.as_str())
            .with("department", self.department.as_str())
            .with("joinDate", self.join_date.as_str())
            .with("salary", self.salary.to_string())
            .with("status", self.status.as_str())
    }

    fn from_draft(draft: &Draft) -> CoerceResult<Self> {
        Ok(Self {
            id: 0,
            name: draft.text("name"),
            email: draft.text("email"),
            position: draft.text("position"),
            department: draft.text("department"),
            join_date: draft.text("joinDate"),
            salary: draft.whole_dollars("salary")?,
            status: draft.status("status")?,
        })
    }

    fn sort_value(&self, column: &str) -> Option<SortValue> {
        let value = match column {
            "name" => SortValue::Text(self.name.clone()),
            "email" => SortValue::Text(self.email.clone()),
            "position" => SortValue::Text(self.position.clone()),
            "department" => SortValue::Text(self.department.clone()),
            "joinDate" => SortValue::Text(self.join_date.clone()),
            "salary" => SortValue::Number(self.salary as f64),
            "status" => SortValue::Text(self.status.as_str().to_string()),
            _ => return None,
        };
        Some(value)
    }

    fn display_value(&self, key: &str) -> Option<String> {
        let value = match key {
            "id" => self.id.to_string(),
            "name" => self.name.clone(),
            "email" => self.email.clone(),
            "position" => self.position.clone(),
            "department" => self.department.clone(),
            "joinDate" => self.join_date.clone(),
            "salary" => format_currency(self.salary),
            "status" => self.status.as_str().to_string(),
            _ => return None,
        };
        Some(value)
    }
}
