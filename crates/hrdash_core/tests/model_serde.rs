use hrdash_core::{seed, Employee, EmployeeStatus, Recruitment, RecruitmentStatus, Severity};
use serde_json::json;

#[test]
fn employee_uses_camel_case_wire_names() {
    let employee = seed::employees().remove(2);
    let value = serde_json::to_value(&employee).unwrap();

    assert_eq!(value["joinDate"], json!("2021-01-10"));
    assert_eq!(value["salary"], json!(75_000));
    assert_eq!(value["status"], json!("On Leave"));
    assert!(value.get("join_date").is_none());
}

#[test]
fn recruitment_reads_status_display_strings() {
    let raw = json!({
        "id": 9,
        "candidateName": "Frank Green",
        "candidateId": 109,
        "position": "QA Engineer",
        "applicationDate": "2025-07-22",
        "status": "In Review",
        "interviewer": "Emma Davis"
    });

    let record: Recruitment = serde_json::from_value(raw).unwrap();

    assert_eq!(record.status, RecruitmentStatus::InReview);
    assert_eq!(record.candidate_id, 109);
}

#[test]
fn unknown_status_label_is_rejected() {
    let raw = json!({
        "id": 1,
        "name": "Ada",
        "email": "ada@example.com",
        "position": "Engineer",
        "department": "Engineering",
        "joinDate": "2024-01-01",
        "salary": 1,
        "status": "Retired"
    });

    assert!(serde_json::from_value::<Employee>(raw).is_err());
    assert_eq!(
        serde_json::to_value(EmployeeStatus::Terminated).unwrap(),
        json!("Terminated")
    );
}

#[test]
fn severity_serializes_snake_case() {
    assert_eq!(
        serde_json::to_value(Severity::Negative).unwrap(),
        json!("negative")
    );
    assert_eq!(Severity::Positive.as_str(), "positive");
}
