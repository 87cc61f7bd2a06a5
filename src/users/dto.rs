use serde::Deserialize;

use crate::auth::dto::is_valid_email;
use crate::error::ApiError;

/// Partial profile update; absent fields stay unchanged. Name fields also
/// accept their camelCase spellings.
#[derive(Debug, Deserialize)]
pub struct EditUserRequest {
    pub email: Option<String>,
    #[serde(alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(alias = "lastName")]
    pub last_name: Option<String>,
}

impl EditUserRequest {
    /// Normalizes the email, rejecting a malformed one when present.
    pub fn validate(mut self) -> Result<Self, ApiError> {
        if let Some(email) = self.email.take() {
            let email = email.trim().to_lowercase();
            if !is_valid_email(&email) {
                return Err(ApiError::validation("email must be an email"));
            }
            self.email = Some(email);
        }
        Ok(self)
    }
}
