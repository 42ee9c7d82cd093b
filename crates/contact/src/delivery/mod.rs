use async_trait::async_trait;

use crate::{DeliveryError, TemplateParams};

mod emailjs;

pub use emailjs::*;

/// External capability that transmits a contact message.
#[async_trait]
pub trait Delivery: Send + Sync {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
        public_key: &str,
    ) -> Result<(), DeliveryError>;
}
