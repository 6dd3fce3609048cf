//! Candidate application record.

use crate::model::status::{status_vocabulary, StatusVocabulary};
use crate::model::RecordId;
use crate::schema::{
    ColumnSpec, CoerceResult, Draft, Entity, FieldRule, FieldSpec, SortValue, ACTIONS_COLUMN,
};
use serde::{Deserialize, Serialize};

status_vocabulary! {
    /// Hiring pipeline outcome.
    RecruitmentStatus {
        Hired => "Hired": Positive,
        InReview => "In Review": Neutral,
        Rejected => "Rejected": Negative,
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("candidateName", "Candidate Name", FieldRule::Text),
    FieldSpec::required("candidateId", "Candidate ID", FieldRule::PositiveId),
    FieldSpec::required("position", "Position", FieldRule::Text),
    FieldSpec::required("applicationDate", "Application Date", FieldRule::Date),
    FieldSpec::required(
        "status",
        "Status",
        FieldRule::Select(RecruitmentStatus::LABELS),
    )
    .with_default("In Review"),
    FieldSpec::required("interviewer", "Interviewer", FieldRule::Text),
];

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::sortable("candidateName", "Candidate"),
    ColumnSpec::sortable("candidateId", "Candidate ID"),
    ColumnSpec::sortable("position", "Position"),
    ColumnSpec::sortable("applicationDate", "Application Date"),
    ColumnSpec::sortable("status", "Status"),
    ColumnSpec::sortable("interviewer", "Interviewer"),
    ACTIONS_COLUMN,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recruitment {
    pub id: RecordId,
    pub candidate_name: String,
    pub candidate_id: i64,
    pub position: String,
    /// `YYYY-MM-DD`.
    pub application_date: String,
    pub status: RecruitmentStatus,
    pub interviewer: String,
}

impl Entity for Recruitment {
    type Status = RecruitmentStatus;

    const DOMAIN: &'static str = "recruitment";

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

    fn status(&self) -> RecruitmentStatus {
        self.status
    }

    fn to_draft(&self) -> Draft {
        Draft::new()
            .with("candidateName", self.candidate_name.as_str())
            .with("candidateId", self.candidate_id.to_string())
            .with("position", self.position.as_str())
            .with("applicationDate", self.application_date.as_str())
            .with("status", self.status.as_str())
            .with("interviewer", self.interviewer.as_str())
    }

    fn from_draft(draft: &Draft) -> CoerceResult<Self> {
        Ok(Self {
            id: 0,
            candidate_name: draft.text("candidateName"),
            candidate_id: draft.integer("candidateId")?,
            position: draft.text("position"),
            application_date: draft.text("applicationDate"),
            status: draft.status("status")?,
            interviewer: draft.text("interviewer"),
        })
    }

    fn sort_value(&self, column: &str) -> Option<SortValue> {
        let value = match column {
            "candidateName" => SortValue::Text(self.candidate_name.clone()),
            "candidateId" => SortValue::Number(self.candidate_id as f64),
            "position" => SortValue::Text(self.position.clone()),
            "applicationDate" => SortValue::Text(self.application_date.clone()),
            "status" => SortValue::Text(self.status.as_str().to_string()),
            "interviewer" => SortValue::Text(self.interviewer.clone()),
            _ => return None,
        };
        Some(value)
    }

    fn display_value(&self, key: &str) -> Option<String> {
        let value = match key {
            "id" => self.id.to_string(),
            "candidateName" => self.candidate_name.clone(),
            "candidateId" => self.candidate_id.to_string(),
            "position" => self.position.clone(),
            "applicationDate" => self.application_date.clone(),
            "status" => self.status.as_str().to_string(),
            "interviewer" => self.interviewer.clone(),
            _ => return None,
        };
        Some(value)
    }
}
