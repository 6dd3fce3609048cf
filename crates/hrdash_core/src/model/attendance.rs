//! Daily attendance record.

use crate::model::status::{status_vocabulary, StatusVocabulary};
use crate::model::RecordId;
use crate::schema::{
    format_hours, ColumnSpec, CoerceResult, Draft, Entity, FieldRule, FieldSpec, SortValue,
    ACTIONS_COLUMN,
};
use serde::{Deserialize, Serialize};

status_vocabulary! {
    /// Attendance outcome for one day.
    AttendanceStatus {
        Present => "Present": Positive,
        Absent => "Absent": Negative,
        Late => "Late": Neutral,
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("employeeName", "Employee Name", FieldRule::Text),
    FieldSpec::required("employeeId", "Employee ID", FieldRule::PositiveId),
    FieldSpec::required("date", "Date", FieldRule::Date),
    FieldSpec::required("checkIn", "Check-in time", FieldRule::TimeOfDay("09:00 AM")),
    FieldSpec::optional("checkOut", "Check-out time", FieldRule::TimeOfDay("05:00 PM")),
    FieldSpec::required("status", "Status", FieldRule::Select(AttendanceStatus::LABELS))
        .with_default("Present"),
    FieldSpec::required("hoursWorked", "Hours Worked", FieldRule::Hours),
];

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::sortable("employeeName", "Employee"),
    ColumnSpec::sortable("employeeId", "Employee ID"),
    ColumnSpec::sortable("date", "Date"),
    ColumnSpec::sortable("checkIn", "Check In"),
    ColumnSpec::sortable("checkOut", "Check Out"),
    ColumnSpec::sortable("status", "Status"),
    ColumnSpec::sortable("hoursWorked", "Hours Worked"),
    ACTIONS_COLUMN,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: RecordId,
    pub employee_name: String,
    pub employee_id: i64,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM AM|PM`; empty for absences.
    pub check_in: String,
    /// `HH:MM AM|PM`; empty when not checked out.
    pub check_out: String,
    pub status: AttendanceStatus,
    pub hours_worked: f64,
}

impl Entity for Attendance {
    type Status = AttendanceStatus;

    const DOMAIN: &'static str = "attendance";

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

    fn status(&self) -> AttendanceStatus {
        self.status
    }

    fn to_draft(&self) -> Draft {
        Draft::new()
            .with("employeeName", self.employee_name.as_str())
            .with("employeeId", self.employee_id.to_string())
            .with("date", self.date.as_str())
            .with("checkIn", self.check_in.as_str())
            .with("checkOut", self.check_out.as_str())
            .with("status", self.status.as_str())
            .with("hoursWorked", format_hours(self.hours_worked))
    }

    fn from_draft(draft: &Draft) -> CoerceResult<Self> {
        Ok(Self {
            id: 0,
            employee_name: draft.text("employeeName"),
            employee_id: draft.integer("employeeId")?,
            date: draft.text("date"),
            check_in: draft.text("checkIn"),
            check_out: draft.text("checkOut"),
            status: draft.status("status")?,
            hours_worked: draft.hours("hoursWorked")?,
        })
    }

    fn sort_value(&self, column: &str) -> Option<SortValue> {
        let value = match column {
            "employeeName" => SortValue::Text(self.employee_name.clone()),
            "employeeId" => SortValue::Number(self.employee_id as f64),
            "date" => SortValue::Text(self.date.clone()),
            "checkIn" => SortValue::Text(self.check_in.clone()),
            "checkOut" => SortValue::Text(self.check_out.clone()),
            "status" => SortValue::Text(self.status.as_str().to_string()),
            "hoursWorked" => SortValue::Number(self.hours_worked),
            _ => return None,
        };
        Some(value)
    }

    fn display_value(&self, key: &str) -> Option<String> {
        let value = match key {
            "id" => self.id.to_string(),
            "employeeName" => self.employee_name.clone(),
            "employeeId" => self.employee_id.to_string(),
            "date" => self.date.clone(),
            "checkIn" => dash_if_empty(&self.check_in),
            "checkOut" => dash_if_empty(&self.check_out),
            "status" => self.status.as_str().to_string(),
            "hoursWorked" => format_hours(self.hours_worked),
            _ => return None,
        };
        Some(value)
    }
}

fn dash_if_empty(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
