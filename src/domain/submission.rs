use crate::error::FieldError;
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

pub const MIN_NAME_CHARS: usize = 3;
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Review state of a submission in the admin inbox.
///
/// Transitions are unordered: an admin may set any status from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    New,
    Read,
    Replied,
}

impl SubmissionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
        }
    }

    /// Display label shown in the admin inbox.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "Nova",
            Self::Read => "Lida",
            Self::Replied => "Respondida",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub status: SubmissionStatus,
    pub created_at: OffsetDateTime,
}

/// Unvalidated contact-form input as received from the public site.
#[derive(Debug, Clone)]
pub struct SubmissionDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl SubmissionDraft {
    /// Checks every declared constraint and collects one error per field.
    ///
    /// # Errors
    /// Returns every violated constraint; an empty error list is never returned.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.chars().count() < MIN_NAME_CHARS {
            errors.push(FieldError { field: "name", message: "Nome deve ter pelo menos 3 caracteres" });
        }

        if !EmailAddress::is_valid(&self.email) {
            errors.push(FieldError { field: "email", message: "Email inválido" });
        }

        if self.message.chars().count() < MIN_MESSAGE_CHARS {
            errors.push(FieldError { field: "message", message: "Mensagem deve ter pelo menos 10 caracteres" });
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
