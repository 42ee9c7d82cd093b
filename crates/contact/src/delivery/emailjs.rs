//! EmailJS REST delivery using reqwest

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::{Delivery, DeliveryError, TemplateParams};

pub const EMAILJS_API_URL: &str = "https://api.emailjs.com";

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Sends contact messages through the EmailJS `email/send` endpoint.
#[derive(Clone, Debug)]
pub struct EmailJs {
    client: reqwest::Client,
    api_url: String,
    access_token: Option<String>,
}

impl Default for EmailJs {
    fn default() -> Self {
        Self::new(EMAILJS_API_URL)
    }
}

impl EmailJs {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            access_token: None,
        }
    }

    /// Private key required by EmailJS when API calls from non-browser
    /// environments run in strict mode. Empty tokens are ignored.
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        let access_token = access_token.into();
        self.access_token = (!access_token.is_empty()).then_some(access_token);
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/v1.0/email/send", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Delivery for EmailJs {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
        public_key: &str,
    ) -> Result<(), DeliveryError> {
        let request = SendRequest {
            service_id,
            template_id,
            user_id: public_key,
            template_params: params,
            access_token: self.access_token.as_deref(),
        };

        let response = match self.client.post(self.endpoint()).json(&request).send().await {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, endpoint = %self.endpoint(), "EmailJS request failed");
                return Err(DeliveryError::without_text());
            }
        };

        let status = response.status();
        if status.is_success() {
            info!(service_id, template_id, "EmailJS accepted the message");
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        let text = text.trim();

        warn!(
            status = status.as_u16(),
            text,
            service_id,
            template_id,
            "EmailJS rejected the message"
        );

        if text.is_empty() {
            return Err(DeliveryError::without_text());
        }

        Err(DeliveryError::new(text))
    }
}
