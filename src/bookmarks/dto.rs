use serde::Deserialize;

use crate::error::ApiError;

/// Body of POST /bookmarks. Required fields are optional at the serde level
/// so a missing one maps to a 400 from `validate`.
#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

/// Validated create payload.
#[derive(Debug)]
pub struct NewBookmark {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

impl CreateBookmarkRequest {
    pub fn validate(self) -> Result<NewBookmark, ApiError> {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApiError::validation("title should not be empty"))?;
        let link = self
            .link
            .filter(|l| !l.trim().is_empty())
            .ok_or_else(|| ApiError::validation("link should not be empty"))?;
        Ok(NewBookmark {
            title,
            description: self.description,
            link,
        })
    }
}

/// Body of PATCH /bookmarks/:id; absent fields stay unchanged. An empty
/// partial is a valid no-op.
#[derive(Debug, Deserialize)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}
