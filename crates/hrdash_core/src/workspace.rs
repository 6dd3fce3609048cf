//! Dashboard-wide state: one independently-owned manager per domain table.
//!
//! # Invariants
//! - Managers share nothing; mutating one table never touches another.

use crate::model::attendance::Attendance;
use crate::model::employee::Employee;
use crate::model::leave::Leave;
use crate::model::payroll::Payroll;
use crate::model::recruitment::Recruitment;
use crate::seed;
use crate::service::grid::{GridOptions, SortState};
use crate::service::manager::RecordManager;
use log::info;

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub employees: RecordManager<Employee>,
    pub attendance: RecordManager<Attendance>,
    pub payroll: RecordManager<Payroll>,
    pub recruitment: RecordManager<Recruitment>,
    pub leave: RecordManager<Leave>,
}

impl Workspace {
    /// Empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables loaded with the mock datasets.
    ///
    /// The employee directory opens sorted by name; the other grids keep
    /// insertion order until a header is clicked. Leave starts empty.
    pub fn seeded() -> Self {
        let workspace = Self {
            employees: RecordManager::with_records(
                seed::employees(),
                GridOptions {
                    sort: Some(SortState::ascending("name")),
                    ..GridOptions::default()
                },
            ),
            attendance: RecordManager::with_records(seed::attendance(), GridOptions::default()),
            payroll: RecordManager::with_records(seed::payroll(), GridOptions::default()),
            recruitment: RecordManager::with_records(
                seed::recruitment(),
                GridOptions::default(),
            ),
            leave: RecordManager::new(),
        };
        info!(
            "event=workspace_seeded module=core status=ok employees={} attendance={} payroll={} recruitment={} leave={}",
            workspace.employees.records().len(),
            workspace.attendance.records().len(),
            workspace.payroll.records().len(),
            workspace.recruitment.records().len(),
            workspace.leave.records().len()
        );
        workspace
    }
}
