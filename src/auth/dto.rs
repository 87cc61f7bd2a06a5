use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Body of both signup and signin. Fields are optional so a missing field
/// surfaces as a 400 from `validate` rather than a deserialization reject.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Normalized credentials extracted from an [`AuthRequest`].
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl AuthRequest {
    pub fn validate(self) -> Result<Credentials, ApiError> {
        let email = self
            .email
            .as_deref()
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .ok_or_else(|| ApiError::validation("email should not be empty"))?;

        if !is_valid_email(&email) {
            return Err(ApiError::validation("email must be an email"));
        }

        let password = self
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ApiError::validation("password should not be empty"))?;

        Ok(Credentials { email, password })
    }
}

/// Response returned after signup or signin.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}
