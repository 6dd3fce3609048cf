//! Mock datasets each dashboard table starts from.
//!
//! Seeded records bypass form validation: the absent attendance row has no
//! check-in time, which the form would reject on edit until filled in.

use crate::model::attendance::{Attendance, AttendanceStatus};
use crate::model::employee::{Employee, EmployeeStatus};
use crate::model::payroll::{Payroll, PayrollStatus};
use crate::model::recruitment::{Recruitment, RecruitmentStatus};

/// Thirteen employees across all departments.
pub fn employees() -> Vec<Employee> {
    #[rustfmt::skip]
    let rows: [(&str, &str, &str, &str, &str, u64, EmployeeStatus); 13] = [
        ("John Doe", "john.doe@example.com", "Software Engineer", "Engineering", "2020-05-15", 85_000, EmployeeStatus::Active),
        ("Jane Smith", "jane.smith@example.com", "Product Manager", "Product", "2019-08-22", 95_000, EmployeeStatus::Active),
        ("Robert Johnson", "robert.j@example.com", "UX Designer", "Design", "2021-01-10", 75_000, EmployeeStatus::OnLeave),
        ("Emily Davis", "emily.d@example.com", "HR Specialist", "Human Resources", "2018-11-05", 65_000, EmployeeStatus::Active),
        ("Michael Wilson", "michael.w@example.com", "DevOps Engineer", "Engineering", "2020-03-18", 90_000, EmployeeStatus::Active),
        ("Sarah Brown", "sarah.b@example.com", "Marketing Lead", "Marketing", "2019-06-30", 80_000, EmployeeStatus::Terminated),
        ("David Lee", "david.lee@example.com", "Data Analyst", "Analytics", "2021-07-12", 70_000, EmployeeStatus::Active),
        ("Jessica Taylor", "jessica.t@example.com", "QA Engineer", "Engineering", "2020-09-25", 78_000, EmployeeStatus::Active),
        ("Daniel Martinez", "daniel.m@example.com", "Sales Executive", "Sales", "2021-02-14", 72_000, EmployeeStatus::OnLeave),
        ("Olivia Anderson", "olivia.a@example.com", "Finance Manager", "Finance", "2018-04-08", 110_000, EmployeeStatus::Active),
        ("William Thomas", "william.t@example.com", "Frontend Developer", "Engineering", "2021-05-20", 82_000, EmployeeStatus::Active),
        ("Sophia White", "sophia.w@example.com", "Content Writer", "Marketing", "2020-10-15", 60_000, EmployeeStatus::Active),
        ("James Harris", "james.h@example.com", "Backend Developer", "Engineering", "2019-12-03", 88_000, EmployeeStatus::Terminated),
    ];

    rows.into_iter()
        .zip(1..)
        .map(
            |((name, email, position, department, join_date, salary, status), id)| Employee {
                id,
                name: name.to_string(),
                email: email.to_string(),
                position: position.to_string(),
                department: department.to_string(),
                join_date: join_date.to_string(),
                salary,
                status,
            },
        )
        .collect()
}

/// One day of attendance for the first five employees.
pub fn attendance() -> Vec<Attendance> {
    let rows: [(&str, &str, &str, AttendanceStatus, f64); 5] = [
        ("John Doe", "09:00 AM", "05:00 PM", AttendanceStatus::Present, 8.0),
        ("Jane Smith", "09:15 AM", "04:45 PM", AttendanceStatus::Late, 7.5),
        ("Robert Johnson", "", "", AttendanceStatus::Absent, 0.0),
        ("Emily Davis", "08:45 AM", "05:15 PM", AttendanceStatus::Present, 8.5),
        ("Michael Wilson", "09:05 AM", "05:00 PM", AttendanceStatus::Present, 7.9),
    ];

    rows.into_iter()
        .zip(1..)
        .map(
            |((employee_name, check_in, check_out, status, hours_worked), id)| Attendance {
                id,
                employee_name: employee_name.to_string(),
                employee_id: id,
                date: "2025-07-20".to_string(),
                check_in: check_in.to_string(),
                check_out: check_out.to_string(),
                status,
                hours_worked,
            },
        )
        .collect()
}

/// July 2025 payroll for the first five employees.
pub fn payroll() -> Vec<Payroll> {
    let rows: [(&str, f64, f64, f64, PayrollStatus); 5] = [
        ("John Doe", 5000.0, 1200.0, 3800.0, PayrollStatus::Processed),
        ("Jane Smith", 4500.0, 1000.0, 3500.0, PayrollStatus::Pending),
        ("Robert Johnson", 4800.0, 1100.0, 3700.0, PayrollStatus::Processed),
        ("Emily Davis", 5200.0, 1300.0, 3900.0, PayrollStatus::Processed),
        ("Michael Wilson", 4700.0, 1050.0, 3650.0, PayrollStatus::Failed),
    ];

    rows.into_iter()
        .zip(1..)
        .map(
            |((employee_name, gross_pay, deductions, net_pay, status), id)| Payroll {
                id,
                employee_name: employee_name.to_string(),
                employee_id: id,
                pay_period: "2025-07".to_string(),
                gross_pay,
                deductions,
                net_pay,
                status,
            },
        )
        .collect()
}

/// Five open and closed applications.
pub fn recruitment() -> Vec<Recruitment> {
    #[rustfmt::skip]
    let rows: [(&str, &str, &str, RecruitmentStatus, &str); 5] = [
        ("Alice Brown", "Software Engineer", "2025-07-15", RecruitmentStatus::Hired, "John Smith"),
        ("Bob Wilson", "Product Manager", "2025-07-16", RecruitmentStatus::InReview, "Emma Davis"),
        ("Clara Johnson", "UI/UX Designer", "2025-07-17", RecruitmentStatus::Rejected, "Michael Lee"),
        ("David Miller", "Data Analyst", "2025-07-18", RecruitmentStatus::InReview, "Sarah Taylor"),
        ("Emma White", "DevOps Engineer", "2025-07-19", RecruitmentStatus::Hired, "James Brown"),
    ];

    rows.into_iter()
        .zip(1..)
        .map(
            |((candidate_name, position, application_date, status, interviewer), id)| {
                Recruitment {
                    id,
                    candidate_name: candidate_name.to_string(),
                    candidate_id: 100 + id,
                    position: position.to_string(),
                    application_date: application_date.to_string(),
                    status,
                    interviewer: interviewer.to_string(),
                }
            },
        )
        .collect()
}
