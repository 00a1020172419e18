use crate::domain::submission::{ContactSubmission, SubmissionDraft, SubmissionStatus};
use crate::error::{AppError, Result};
use crate::storage::submission_repo::SubmissionRepository;

#[derive(Clone, Debug)]
pub struct ContactService {
    repo: SubmissionRepository,
}

impl ContactService {
    #[must_use]
    pub const fn new(repo: SubmissionRepository) -> Self {
        Self { repo }
    }

    /// Records a contact-form submission from the public site.
    ///
    /// Validation runs before any store interaction. A store failure is
    /// logged with full detail and surfaced as a generic submission error.
    ///
    /// # Errors
    /// Returns `AppError::Validation` with per-field messages on bad input,
    /// `AppError::Submission` if the store rejects the insert.
    #[tracing::instrument(err(level = "warn"), skip(self, draft))]
    pub async fn submit(&self, draft: SubmissionDraft) -> Result<ContactSubmission> {
        draft.validate().map_err(AppError::Validation)?;

        match self.repo.create(&draft).await {
            Ok(submission) => {
                tracing::info!(id = submission.id, "Contact submission recorded");
                Ok(submission)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error submitting contact form");
                Err(AppError::Submission)
            }
        }
    }

    /// Returns the full inbox, newest first. No pagination.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the store call fails.
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn list(&self) -> Result<Vec<ContactSubmission>> {
        self.repo.list_all().await
    }

    /// # Errors
    /// Returns `AppError::NotFound` if the id does not exist.
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<ContactSubmission> {
        self.repo.get_by_id(id).await?.ok_or(AppError::NotFound)
    }

    /// Sets the review status of a submission. Transitions are unordered and
    /// re-applying the current status is an idempotent no-op.
    ///
    /// # Errors
    /// Returns `AppError::NotFound` if the id does not exist.
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn update_status(&self, id: i64, status: SubmissionStatus) -> Result<()> {
        if self.repo.update_status(id, status).await? {
            tracing::info!(id, status = %status, "Submission status updated");
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}
