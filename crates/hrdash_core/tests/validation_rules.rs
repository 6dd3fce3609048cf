use hrdash_core::{validate, Attendance, Draft, Employee, ErrorKind, Leave, Payroll};

fn employee_draft() -> Draft {
    Draft::new()
        .with("name", "Ada Lovelace")
        .with("email", "ada@example.com")
        .with("position", "Software Engineer")
        .with("department", "Engineering")
        .with("joinDate", "2024-02-01")
        .with("salary", "85000")
        .with("status", "Active")
}

fn leave_draft(start: &str, end: &str) -> Draft {
    Draft::new()
        .with("employeeName", "John Doe")
        .with("employeeId", "1")
        .with("leaveType", "Annual")
        .with("startDate", start.to_string())
        .with("endDate", end.to_string())
        .with("status", "Pending")
}

fn attendance_draft() -> Draft {
    Draft::new()
        .with("employeeName", "John Doe")
        .with("employeeId", "1")
        .with("date", "2025-07-21")
        .with("checkIn", "09:00 AM")
        .with("checkOut", "05:00 PM")
        .with("status", "Present")
        .with("hoursWorked", "8h")
}

fn payroll_draft() -> Draft {
    Draft::new()
        .with("employeeName", "John Doe")
        .with("employeeId", "1")
        .with("payPeriod", "2025-08")
        .with("grossPay", "5000")
        .with("deductions", "1200")
        .with("netPay", "3800")
        .with("status", "Pending")
}

#[test]
fn valid_employee_draft_has_no_errors() {
    assert!(validate::<Employee>(&employee_draft()).is_empty());
}

#[test]
fn empty_draft_reports_every_required_field_at_once() {
    let errors = validate::<Employee>(&Draft::new());
    assert_eq!(errors.len(), 7);
    assert!(errors
        .iter()
        .all(|(_, error)| error.kind == ErrorKind::Required));
    assert_eq!(
        errors.get("name").map(|error| error.message.as_str()),
        Some("Name is required")
    );
}

#[test]
fn whitespace_only_text_is_required() {
    let draft = employee_draft().with("name", "   ");
    let errors = validate::<Employee>(&draft);
    assert_eq!(errors.kind("name"), Some(ErrorKind::Required));
    assert_eq!(errors.len(), 1);
}

#[test]
fn email_shape_is_enforced() {
    let errors = validate::<Employee>(&employee_draft().with("email", "not-an-email"));
    assert_eq!(errors.kind("email"), Some(ErrorKind::InvalidFormat));

    let errors = validate::<Employee>(&employee_draft().with("email", "user@example.com"));
    assert!(errors.is_empty());
}

#[test]
fn date_check_is_format_only() {
    let errors = validate::<Employee>(&employee_draft().with("joinDate", "2025-13-40"));
    assert!(errors.is_empty());

    let errors = validate::<Employee>(&employee_draft().with("joinDate", "15/05/2020"));
    assert_eq!(errors.kind("joinDate"), Some(ErrorKind::InvalidFormat));
}

#[test]
fn select_fields_reject_unlisted_options() {
    let errors = validate::<Employee>(&employee_draft().with("department", "Legal"));
    assert_eq!(errors.kind("department"), Some(ErrorKind::InvalidValue));

    let errors = validate::<Employee>(&employee_draft().with("status", "Retired"));
    assert_eq!(errors.kind("status"), Some(ErrorKind::InvalidValue));
}

#[test]
fn salary_must_be_plain_digits() {
    let errors = validate::<Employee>(&employee_draft().with("salary", "$85,000"));
    assert_eq!(errors.kind("salary"), Some(ErrorKind::InvalidValue));

    let errors = validate::<Employee>(&employee_draft().with("salary", ""));
    assert_eq!(errors.kind("salary"), Some(ErrorKind::Required));
}

#[test]
fn salary_too_large_to_store_is_invalid_value() {
    let draft = employee_draft().with("salary", "99999999999999999999999");
    let errors = validate::<Employee>(&draft);
    assert_eq!(errors.kind("salary"), Some(ErrorKind::InvalidValue));
    assert_eq!(errors.len(), 1);
}

#[test]
fn leave_end_before_start_is_invalid_range() {
    let errors = validate::<Leave>(&leave_draft("2025-01-10", "2025-01-05"));
    assert_eq!(errors.kind("endDate"), Some(ErrorKind::InvalidRange));
    assert!(!errors.contains("startDate"));
}

#[test]
fn leave_on_a_single_day_is_accepted() {
    let errors = validate::<Leave>(&leave_draft("2025-01-10", "2025-01-10"));
    assert!(errors.is_empty());
}

#[test]
fn leave_range_is_skipped_when_a_date_is_malformed() {
    let errors = validate::<Leave>(&leave_draft("2025-01-10", "yesterday"));
    assert_eq!(errors.kind("endDate"), Some(ErrorKind::InvalidFormat));
}

#[test]
fn attendance_time_and_hours_patterns() {
    assert!(validate::<Attendance>(&attendance_draft()).is_empty());

    let errors = validate::<Attendance>(&attendance_draft().with("checkIn", "9am"));
    assert_eq!(errors.kind("checkIn"), Some(ErrorKind::InvalidFormat));

    let errors = validate::<Attendance>(&attendance_draft().with("hoursWorked", "8"));
    assert_eq!(errors.kind("hoursWorked"), Some(ErrorKind::InvalidFormat));

    let errors = validate::<Attendance>(&attendance_draft().with("hoursWorked", "7.5h"));
    assert!(errors.is_empty());
}

#[test]
fn time_messages_quote_each_field_example() {
    let draft = attendance_draft()
        .with("checkIn", "nine")
        .with("checkOut", "five");
    let errors = validate::<Attendance>(&draft);

    assert_eq!(
        errors.get("checkIn").map(|error| error.message.as_str()),
        Some("Invalid time format (e.g., 09:00 AM)")
    );
    assert_eq!(
        errors.get("checkOut").map(|error| error.message.as_str()),
        Some("Invalid time format (e.g., 05:00 PM)")
    );
}

#[test]
fn attendance_check_out_is_optional() {
    let errors = validate::<Attendance>(&attendance_draft().with("checkOut", ""));
    assert!(errors.is_empty());

    let errors = validate::<Attendance>(&attendance_draft().with("checkOut", "17:00"));
    assert_eq!(errors.kind("checkOut"), Some(ErrorKind::InvalidFormat));
}

#[test]
fn payroll_zero_policy_is_per_field() {
    let errors = validate::<Payroll>(&payroll_draft().with("grossPay", "0"));
    assert_eq!(errors.kind("grossPay"), Some(ErrorKind::InvalidValue));

    let draft = payroll_draft().with("deductions", "0").with("netPay", "0");
    assert!(validate::<Payroll>(&draft).is_empty());

    let errors = validate::<Payroll>(&payroll_draft().with("deductions", ""));
    assert_eq!(errors.kind("deductions"), Some(ErrorKind::Required));

    let errors = validate::<Payroll>(&payroll_draft().with("netPay", "-5"));
    assert_eq!(errors.kind("netPay"), Some(ErrorKind::InvalidValue));
}

#[test]
fn payroll_period_is_year_month() {
    let errors = validate::<Payroll>(&payroll_draft().with("payPeriod", "2025-07-01"));
    assert_eq!(errors.kind("payPeriod"), Some(ErrorKind::InvalidFormat));
}

#[test]
fn employee_id_zero_counts_as_missing() {
    let errors = validate::<Payroll>(&payroll_draft().with("employeeId", "0"));
    assert_eq!(errors.kind("employeeId"), Some(ErrorKind::Required));

    let errors = validate::<Payroll>(&payroll_draft().with("employeeId", "abc"));
    assert_eq!(errors.kind("employeeId"), Some(ErrorKind::InvalidValue));
}
