//! Core record management for the HR dashboard.
//! One generic record manager (store, form, grid, detail view) is
//! instantiated per domain table; this crate owns every business rule.

pub mod logging;
pub mod model;
pub mod repo;
pub mod schema;
pub mod seed;
pub mod service;
pub mod validation;
pub mod workspace;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::attendance::{Attendance, AttendanceStatus};
pub use model::employee::{Employee, EmployeeStatus, DEPARTMENTS};
pub use model::leave::{Leave, LeaveStatus, LEAVE_TYPES};
pub use model::payroll::{Payroll, PayrollStatus};
pub use model::recruitment::{Recruitment, RecruitmentStatus};
pub use model::status::{classify_status, Severity, SeverityMap, StatusVocabulary};
pub use model::RecordId;
pub use repo::record_store::{RecordRepository, RecordStore, StoreError, StoreResult};
pub use schema::{
    ColumnSpec, CoerceError, Draft, Entity, FieldRule, FieldSpec, SortValue, ZeroPolicy,
};
pub use service::detail::{DetailField, DetailView, StatusBadge};
pub use service::form::{FormController, FormError, FormMode, FormResult, FormState};
pub use service::grid::{
    GridOptions, GridPage, GridView, RowAction, SortDirection, SortState, DEFAULT_PAGE_SIZE,
    PAGE_SIZE_OPTIONS,
};
pub use service::manager::RecordManager;
pub use validation::{validate, ErrorKind, ErrorMap, FieldError};
pub use workspace::Workspace;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
