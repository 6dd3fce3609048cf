//! Payroll run record.
//!
//! `net_pay` is stored exactly as entered; it is never derived from
//! `gross_pay - deductions`.

use crate::model::status::{status_vocabulary, StatusVocabulary};
use crate::model::RecordId;
use crate::schema::{
    format_money, ColumnSpec, CoerceResult, Draft, Entity, FieldRule, FieldSpec, SortValue,
    ZeroPolicy, ACTIONS_COLUMN,
};
use serde::{Deserialize, Serialize};

status_vocabulary! {
    /// Payroll processing state.
    PayrollStatus {
        Processed => "Processed": Positive,
        Pending => "Pending": Neutral,
        Failed => "Failed": Negative,
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("employeeName", "Employee Name", FieldRule::Text),
    FieldSpec::required("employeeId", "Employee ID", FieldRule::PositiveId),
    FieldSpec::required("payPeriod", "Pay Period", FieldRule::YearMonth),
    FieldSpec::required(
        "grossPay",
        "Gross Pay",
        FieldRule::Money(ZeroPolicy::Rejected),
    ),
    FieldSpec::required(
        "deductions",
        "Deductions",
        FieldRule::Money(ZeroPolicy::Allowed),
    ),
    FieldSpec::required("netPay", "Net Pay", FieldRule::Money(ZeroPolicy::Allowed)),
    FieldSpec::required("status", "Status", FieldRule::Select(PayrollStatus::LABELS))
        .with_default("Pending"),
];

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::sortable("employeeName", "Employee"),
    ColumnSpec::sortable("employeeId", "Employee ID"),
    ColumnSpec::sortable("payPeriod", "Pay Period"),
    ColumnSpec::sortable("grossPay", "Gross Pay"),
    ColumnSpec::sortable("deductions", "Deductions"),
    ColumnSpec::sortable("netPay", "Net Pay"),
    ColumnSpec::sortable("status", "Status"),
    ACTIONS_COLUMN,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    pub id: RecordId,
    pub employee_name: String,
    pub employee_id: i64,
    /// `YYYY-MM`.
    pub pay_period: String,
    pub gross_pay: f64,
    pub deductions: f64,
    pub net_pay: f64,
    pub status: PayrollStatus,
}

impl Entity for Payroll {
    type Status = PayrollStatus;

    const DOMAIN: &'static str = "payroll";

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

    fn status(&self) -> PayrollStatus {
        self.status
    }

    fn to_draft(&self) -> Draft {
        Draft::new()
            .with("employeeName", self.employee_name.as_str())
            .with("employeeId", self.employee_id.to_string())
            .with("payPeriod", self.pay_period.as_str())
            .with("grossPay", self.gross_pay.to_string())
            .with("deductions", self.deductions.to_string())
            .with("netPay", self.net_pay.to_string())
            .with("status", self.status.as_str())
    }

    fn from_draft(draft: &Draft) -> CoerceResult<Self> {
        Ok(Self {
            id: 0,
            employee_name: draft.text("employeeName"),
            employee_id: draft.integer("employeeId")?,
            pay_period: draft.text("payPeriod"),
            gross_pay: draft.amount("grossPay")?,
            deductions: draft.amount("deductions")?,
            net_pay: draft.amount("netPay")?,
            status: draft.status("status")?,
        })
    }

    fn sort_value(&self, column: &str) -> Option<SortValue> {
        let value = match column {
            "employeeName" => SortValue::Text(self.employee_name.clone()),
            "employeeId" => SortValue::Number(self.employee_id as f64),
            "payPeriod" => SortValue::Text(self.pay_period.clone()),
            "grossPay" => SortValue::Number(self.gross_pay),
            "deductions" => SortValue::Number(self.deductions),
            "netPay" => SortValue::Number(self.net_pay),
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
            "payPeriod" => self.pay_period.clone(),
            "grossPay" => format_money(self.gross_pay),
            "deductions" => format_money(self.deductions),
            "netPay" => format_money(self.net_pay),
            "status" => self.status.as_str().to_string(),
            _ => return None,
        };
        Some(value)
    }
}
