use crate::domain::submission::{ContactSubmission, SubmissionStatus};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Deserialize)]
pub struct SubmitRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Deserialize)]
pub struct UpdateStatus {
    /// Kept as a raw string so an unknown value surfaces as a field-level
    /// validation error rather than a body deserialization failure.
    pub status: String,
}

#[derive(Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub status: SubmissionStatus,
    pub status_label: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<ContactSubmission> for Submission {
    fn from(submission: ContactSubmission) -> Self {
        Self {
            id: submission.id,
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            message: submission.message,
            status: submission.status,
            status_label: submission.status.label(),
            created_at: submission.created_at,
        }
    }
}
