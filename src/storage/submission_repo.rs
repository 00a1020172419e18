use crate::domain::submission::{ContactSubmission, SubmissionDraft, SubmissionStatus};
use crate::error::Result;
use crate::storage::DbPool;
use crate::storage::records::submission::SubmissionRecord;

#[derive(Clone, Debug)]
pub struct SubmissionRepository {
    pool: DbPool,
}

impl SubmissionRepository {
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new submission. The id comes from the database sequence and
    /// the status starts at `new`.
    pub async fn create(&self, draft: &SubmissionDraft) -> Result<ContactSubmission> {
        let record = sqlx::query_as::<_, SubmissionRecord>(
            r#"
            INSERT INTO contact_submissions (name, email, phone, message, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, phone, message, status, created_at
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.message)
        .bind(SubmissionStatus::New.as_str())
        .fetch_one(&self.pool)
        .await?;

        record.try_into()
    }

    /// Returns the full collection, newest first.
    pub async fn list_all(&self) -> Result<Vec<ContactSubmission>> {
        let records = sqlx::query_as::<_, SubmissionRecord>(
            r#"
            SELECT id, name, email, phone, message, status, created_at
            FROM contact_submissions
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        records.into_iter().map(TryInto::try_into).collect()
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<ContactSubmission>> {
        let record = sqlx::query_as::<_, SubmissionRecord>(
            r#"
            SELECT id, name, email, phone, message, status, created_at
            FROM contact_submissions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        record.map(TryInto::try_into).transpose()
    }

    /// Sets the status of a submission. Returns `false` when the id does not
    /// exist. Re-applying the current status is a no-op update.
    pub async fn update_status(&self, id: i64, status: SubmissionStatus) -> Result<bool> {
        let result = sqlx::query("UPDATE contact_submissions SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
