use hrdash_core::{
    seed, Attendance, AttendanceStatus, FormError, FormMode, GridOptions, Payroll,
    PayrollStatus, RecordManager, RowAction, StoreError, Workspace,
};

fn attendance_manager() -> RecordManager<Attendance> {
    RecordManager::with_records(seed::attendance(), GridOptions::default())
}

#[test]
fn inserted_attendance_is_listed_and_sorts_newest_first() {
    let mut manager = attendance_manager();
    assert_eq!(manager.records().len(), 5);

    manager.open_create();
    manager.set_field("employeeName", "Sarah Brown").unwrap();
    manager.set_field("employeeId", "6").unwrap();
    manager.set_field("date", "2025-07-21").unwrap();
    manager.set_field("checkIn", "08:55 AM").unwrap();
    manager.set_field("hoursWorked", "8h").unwrap();
    let created = manager.submit().unwrap();

    assert_eq!(created.status, AttendanceStatus::Present);
    assert_eq!(created.check_out, "");
    assert_eq!(manager.records().len(), 6);

    assert!(manager.grid_mut().toggle_sort("date"));
    assert!(manager.grid_mut().toggle_sort("date"));
    let page = manager.page();
    assert_eq!(page.total, 6);
    assert_eq!(page.rows[0].id, created.id);
    assert_eq!(page.rows[0].date, "2025-07-21");
}

#[test]
fn payroll_net_pay_is_stored_as_entered() {
    let mut manager =
        RecordManager::<Payroll>::with_records(seed::payroll(), GridOptions::default());
    manager.open_create();
    manager.set_field("employeeName", "David Lee").unwrap();
    manager.set_field("employeeId", "7").unwrap();
    manager.set_field("payPeriod", "2025-08").unwrap();
    manager.set_field("grossPay", "5000").unwrap();
    manager.set_field("deductions", "1200").unwrap();
    manager.set_field("netPay", "3000").unwrap();

    let created = manager.submit().unwrap();

    assert_eq!(created.net_pay, 3000.0);
    assert_eq!(created.status, PayrollStatus::Pending);
    assert_eq!(manager.get(created.id).map(|row| row.net_pay), Some(3000.0));
}

#[test]
fn created_record_reads_back_through_the_grid() {
    let mut workspace = Workspace::new();
    let manager = &mut workspace.leave;
    manager.open_create();
    manager.set_field("employeeName", "Jessica Taylor").unwrap();
    manager.set_field("employeeId", "8").unwrap();
    manager.set_field("leaveType", "Personal").unwrap();
    manager.set_field("startDate", "2025-09-01").unwrap();
    manager.set_field("endDate", "2025-09-03").unwrap();

    let created = manager.submit().unwrap();
    let page = manager.page();

    assert_eq!(page.rows, vec![created.clone()]);
    let shown = &page.rows[0];
    assert_eq!(shown.employee_name, "Jessica Taylor");
    assert_eq!(shown.leave_type, "Personal");
    assert_eq!(shown.end_date, "2025-09-03");
    assert_eq!(shown.id, 1);
}

#[test]
fn invalid_submit_leaves_store_unchanged() {
    let mut manager = attendance_manager();
    manager.open_create();
    manager.set_field("employeeName", "  ").unwrap();

    let err = manager.submit().unwrap_err();

    assert!(matches!(err, FormError::Invalid(_)));
    assert!(manager.form().is_open());
    assert_eq!(manager.records().len(), 5);
}

#[test]
fn row_actions_route_to_overlays_and_store() {
    let mut manager = attendance_manager();

    manager.act(RowAction::View, 2).unwrap();
    assert!(manager.detail().is_open());
    assert!(!manager.form().is_open());

    manager.act(RowAction::Edit, 2).unwrap();
    assert_eq!(manager.form().mode(), Some(FormMode::Edit(2)));
    assert!(!manager.detail().is_open());

    manager.close();
    assert!(!manager.form().is_open());

    manager.act(RowAction::Delete, 2).unwrap();
    assert!(manager.get(2).is_none());
    assert_eq!(manager.records().len(), 4);
}

#[test]
fn deleting_the_viewed_record_closes_the_detail_view() {
    let mut manager = attendance_manager();
    manager.open_view(3).unwrap();

    let removed = manager.delete(3).unwrap();

    assert_eq!(removed.employee_name, "Robert Johnson");
    assert!(!manager.detail().is_open());
}

#[test]
fn deleting_the_edited_record_closes_the_form() {
    let mut manager = attendance_manager();
    manager.open_edit(1).unwrap();

    manager.delete(1).unwrap();

    assert!(!manager.form().is_open());
    assert_eq!(manager.submit().unwrap_err().to_string(), "form is not open");
}

#[test]
fn deleting_another_record_keeps_the_edit_open() {
    let mut manager = attendance_manager();
    manager.open_edit(1).unwrap();

    manager.delete(2).unwrap();

    assert_eq!(manager.form().mode(), Some(FormMode::Edit(1)));
    let committed = manager.submit().unwrap();
    assert_eq!(committed.id, 1);
}

#[test]
fn unknown_ids_are_reported_without_side_effects() {
    let mut manager = attendance_manager();

    assert_eq!(manager.open_edit(42), Err(StoreError::NotFound(42)));
    assert_eq!(manager.open_view(42), Err(StoreError::NotFound(42)));
    assert_eq!(manager.delete(42).map(|_| ()), Err(StoreError::NotFound(42)));
    assert!(!manager.form().is_open());
    assert_eq!(manager.records().len(), 5);
}

#[test]
fn seeded_workspace_keeps_tables_independent() {
    let mut workspace = Workspace::seeded();

    assert_eq!(workspace.employees.records().len(), 13);
    assert_eq!(workspace.attendance.records().len(), 5);
    assert_eq!(workspace.payroll.records().len(), 5);
    assert_eq!(workspace.recruitment.records().len(), 5);
    assert!(workspace.leave.records().is_empty());

    assert_eq!(workspace.employees.page().rows[0].name, "Daniel Martinez");

    workspace.attendance.delete(1).unwrap();
    assert_eq!(workspace.attendance.records().len(), 4);
    assert!(workspace.employees.get(1).is_some());
    assert!(workspace.payroll.get(1).is_some());
}
