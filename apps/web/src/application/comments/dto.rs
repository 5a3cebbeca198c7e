use crate::application::validation::validation_errors_to_domain_error;
use crate::domain::shared::errors::DomainError;
use serde::Deserialize;
use validator::Validate;

pub const MAX_COMMENT_LENGTH: u64 = 1000;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CommentForm {
    #[serde(default)]
    #[validate(length(max = MAX_COMMENT_LENGTH, message = "Comment is too long"))]
    pub body: String,
}

impl CommentForm {
    /// The comment text, or `None` when nothing was written.
    pub fn into_body(self) -> Result<Option<String>, DomainError> {
        if self.body.trim().is_empty() {
            return Ok(None);
        }
        self.validate().map_err(validation_errors_to_domain_error)?;
        Ok(Some(self.body))
    }
}
