//! Leave request record.
//!
//! # Invariants
//! - `end_date` is not earlier than `start_date` for form-created records.

use crate::model::status::{status_vocabulary, StatusVocabulary};
use crate::model::RecordId;
use crate::schema::{
    ColumnSpec, CoerceResult, Draft, Entity, FieldRule, FieldSpec, SortValue, ACTIONS_COLUMN,
};
use crate::validation::{check_date_order, ErrorMap};
use serde::{Deserialize, Serialize};

status_vocabulary! {
    /// Approval state of a leave request.
    LeaveStatus {
        Approved => "Approved": Positive,
        Pending => "Pending": Neutral,
        Rejected => "Rejected": Negative,
    }
}

/// Leave type select-list options.
pub const LEAVE_TYPES: &[&str] = &["Annual", "Sick", "Personal", "Maternity", "Paternity"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("employeeName", "Employee Name", FieldRule::Text),
    FieldSpec::required("employeeId", "Employee ID", FieldRule::PositiveId),
    FieldSpec::required("leaveType", "Leave Type", FieldRule::Select(LEAVE_TYPES)),
    FieldSpec::required("startDate", "Start Date", FieldRule::Date),
    FieldSpec::required("endDate", "End Date", FieldRule::Date),
    FieldSpec::required("status", "Status", FieldRule::Select(LeaveStatus::LABELS))
        .with_default("Pending"),
];

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::sortable("employeeName", "Employee"),
    ColumnSpec::sortable("employeeId", "Employee ID"),
    ColumnSpec::sortable("leaveType", "Leave Type"),
    ColumnSpec::sortable("startDate", "Start Date"),
    ColumnSpec::sortable("endDate", "End Date"),
    ColumnSpec::sortable("status", "Status"),
    ACTIONS_COLUMN,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    pub id: RecordId,
    pub employee_name: String,
    pub employee_id: i64,
    pub leave_type: String,
    /// `YYYY-MM-DD`.
    pub start_date: String,
    /// `YYYY-MM-DD`, inclusive.
    pub end_date: String,
    pub status: LeaveStatus,
}

impl Entity for Leave {
    type Status = LeaveStatus;

    const DOMAIN: &'static str = "leave";

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

    fn status(&self) -> LeaveStatus {
        self.status
    }

    fn to_draft(&self) -> Draft {
        Draft::new()
            .with("employeeName", self.employee_name.as_str())
            .with("employeeId", self.employee_id.to_string())
            .with("leaveType", self.leave_type.as_str())
            .with("startDate", self.start_date.as_str())
            .with("endDate", self.end_date.as_str())
            .with("status", self.status.as_str())
    }

    fn from_draft(draft: &Draft) -> CoerceResult<Self> {
        Ok(Self {
            id: 0,
            employee_name: draft.text("employeeName"),
            employee_id: draft.integer("employeeId")?,
            leave_type: draft.text("leaveType"),
            start_date: draft.text("startDate"),
            end_date: draft.text("endDate"),
            status: draft.status("status")?,
        })
    }

    fn validate_record(draft: &Draft, errors: &mut ErrorMap) {
        check_date_order(draft, "startDate", "endDate", errors);
    }

    fn sort_value(&self, column: &str) -> Option<SortValue> {
        let value = match column {
            "employeeName" => SortValue::Text(self.employee_name.clone()),
            "employeeId" => SortValue::Number(self.employee_id as f64),
            "leaveType" => SortValue::Text(self.leave_type.clone()),
            "startDate" => SortValue::Text(self.start_date.clone()),
            "endDate" => SortValue::Text(self.end_date.clone()),
            "status" => SortValue::Text(self.status.as_str().to_string()),
            _ => return None,
        };
        Some(value)
    }

    fn display_value(&self, key: &str) -> Option<String> {
        let value = match key {
            "id" => self.id.to_string(),
            "employeeName" => self.employee_name.clone(),
            "employeeId" => self.employee_id.to_string(),
            "leaveType" => self.leave_type.clone(),
            "startDate" => self.start_date.clone(),
            "endDate" => self.end_date.clone(),
            "status" => self.status.as_str().to_string(),
            _ => return None,
        };
        Some(value)
    }
}
