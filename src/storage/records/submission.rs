use crate::domain::submission::{ContactSubmission, SubmissionStatus};
use crate::error::AppError;
use time::OffsetDateTime;

#[derive(sqlx::FromRow)]
pub(crate) struct SubmissionRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: OffsetDateTime,
}

impl TryFrom<SubmissionRecord> for ContactSubmission {
    type Error = AppError;

    fn try_from(record: SubmissionRecord) -> Result<Self, Self::Error> {
        // The CHECK constraint makes an unparseable status a data corruption bug.
        let status = record.status.parse::<SubmissionStatus>().map_err(|()| {
            tracing::error!(id = record.id, status = %record.status, "Unknown status in database");
            AppError::Internal
        })?;

        Ok(Self {
            id: record.id,
            name: record.name,
            email: record.email,
            phone: record.phone,
            message: record.message,
            status,
            created_at: record.created_at,
        })
    }
}
