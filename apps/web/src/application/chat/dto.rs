use crate::application::validation::{not_blank, validation_errors_to_domain_error};
use crate::domain::shared::errors::DomainError;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

pub const MAX_MESSAGE_LENGTH: u64 = 1000;

/// Form posted by the chat box. `body` holds the message text.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SendChatForm {
    #[serde(default)]
    #[validate(
        length(max = MAX_MESSAGE_LENGTH, message = "Message is too long"),
        custom(function = "not_blank")
    )]
    pub body: String,
    #[serde(default)]
    pub receiver: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendChatRequest {
    pub message: String,
    pub receiver: Uuid,
}

impl TryFrom<SendChatForm> for SendChatRequest {
    type Error = DomainError;

    fn try_from(form: SendChatForm) -> Result<Self, Self::Error> {
        form.validate().map_err(validation_errors_to_domain_error)?;
        let receiver = Uuid::parse_str(form.receiver.trim())
            .map_err(|_| DomainError::ValidationError("receiver: invalid user id".into()))?;
        Ok(Self {
            message: form.body,
            receiver,
        })
    }
}
