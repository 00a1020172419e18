use crate::error::{AppError, Result};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Caller role carried in the externally-issued session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

/// Claims of the session token issued by the authentication provider.
///
/// This server only verifies tokens; it never issues them.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: i64,
    pub name: String,
    pub role: Role,
    pub exp: usize,
}

impl Claims {
    /// Decodes and verifies a session token.
    ///
    /// # Errors
    /// Returns `AppError::AuthError` if the token is malformed, expired, or
    /// signed with a different secret.
    pub fn decode(token: &str, secret: &str) -> Result<Self> {
        let token_data =
            decode::<Self>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::default())
                .map_err(|_| AppError::AuthError)?;

        Ok(token_data.claims)
    }

    /// Signs these claims. Used by the dev tooling and tests; production
    /// tokens come from the external auth provider.
    ///
    /// # Errors
    /// Returns `AppError::Internal` if signing fails.
    pub fn encode(&self, secret: &str) -> Result<String> {
        encode(&Header::default(), self, &EncodingKey::from_secret(secret.as_bytes()))
            .map_err(|_| AppError::Internal)
    }
}

/// Read-only caller identity derived from a verified session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub name: String,
    pub role: Role,
}

impl CurrentUser {
    /// The single authorization guard for protected operations.
    ///
    /// # Errors
    /// Returns `AppError::Forbidden` unless the caller's role is `admin`.
    pub fn require_admin(&self) -> Result<()> {
        match self.role {
            Role::Admin => Ok(()),
            Role::User => Err(AppError::Forbidden),
        }
    }
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self { id: claims.sub, name: claims.name, role: claims.role }
    }
}
