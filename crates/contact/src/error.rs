use crate::{CONFIGURATION_MISSING_MESSAGE, DEFAULT_FAILURE_MESSAGE, SubmissionStatus};

/// Failure reported by the delivery collaborator.
#[derive(Debug, Clone, Default, PartialEq, thiserror::Error)]
#[error("{}", .text.as_deref().unwrap_or("delivery failed without a message"))]
pub struct DeliveryError {
    pub text: Option<String>,
}

impl DeliveryError {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn without_text() -> Self {
        Self { text: None }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("configuration missing")]
    ConfigurationMissing,

    #[error("{0}")]
    Delivery(#[from] DeliveryError),
}

impl SubmitError {
    /// Text shown to the visitor.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::ConfigurationMissing => CONFIGURATION_MISSING_MESSAGE.to_owned(),
            SubmitError::Delivery(DeliveryError { text: Some(text) }) if !text.is_empty() => {
                text.to_owned()
            }
            SubmitError::Delivery(_) => DEFAULT_FAILURE_MESSAGE.to_owned(),
        }
    }
}

impl From<SubmitError> for SubmissionStatus {
    fn from(value: SubmitError) -> Self {
        SubmissionStatus::Error(value.user_message())
    }
}
