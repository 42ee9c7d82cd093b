use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use validator::Validate;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";
pub const CONFIGURATION_MISSING_MESSAGE: &str = "configuration missing";

/// Values typed into the contact form.
///
/// Presence of every field is checked by the page before a submission is
/// started; the workflow itself sends whatever it is given.
#[derive(Validate, Default, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormState {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl FormState {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_params(&self) -> TemplateParams {
        TemplateParams {
            name: self.name.to_owned(),
            email: self.email.to_owned(),
            message: self.message.to_owned(),
        }
    }
}

/// Payload handed to the delivery collaborator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Default, Clone, Debug, PartialEq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    /// `idle`, `success` or `error`.
    pub fn kind(&self) -> &str {
        self.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Success(message) | SubmissionStatus::Error(message) => Some(message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SubmissionStatus::Error(_))
    }
}

/// Identifiers required by the delivery collaborator.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct DeliveryConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl DeliveryConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}
