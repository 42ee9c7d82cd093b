#![allow(dead_code)]

use std::{sync::Mutex, time::Duration};

use async_trait::async_trait;
use folio_contact::{BusyFlag, Delivery, DeliveryConfig, DeliveryError, TemplateParams};

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub service_id: String,
    pub template_id: String,
    pub params: TemplateParams,
    pub public_key: String,
}

/// Delivery double returning a fixed outcome and recording every call.
pub struct MockDelivery {
    outcome: Result<(), DeliveryError>,
    delay: Option<Duration>,
    watched: Option<BusyFlag>,
    pub calls: Mutex<Vec<Call>>,
    pub busy_during_send: Mutex<Vec<bool>>,
}

impl MockDelivery {
    pub fn succeed() -> Self {
        Self::with_outcome(Ok(()))
    }

    pub fn reject(text: &str) -> Self {
        Self::with_outcome(Err(DeliveryError::new(text)))
    }

    pub fn reject_without_text() -> Self {
        Self::with_outcome(Err(DeliveryError::without_text()))
    }

    fn with_outcome(outcome: Result<(), DeliveryError>) -> Self {
        Self {
            outcome,
            delay: None,
            watched: None,
            calls: Mutex::new(vec![]),
            busy_during_send: Mutex::new(vec![]),
        }
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn watch(mut self, busy: BusyFlag) -> Self {
        self.watched = Some(busy);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Delivery for MockDelivery {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
        public_key: &str,
    ) -> Result<(), DeliveryError> {
        if let Some(busy) = &self.watched {
            self.busy_during_send.lock().unwrap().push(busy.is_busy());
        }

        self.calls.lock().unwrap().push(Call {
            service_id: service_id.to_owned(),
            template_id: template_id.to_owned(),
            params: params.clone(),
            public_key: public_key.to_owned(),
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.outcome.clone()
    }
}

pub fn complete_config() -> DeliveryConfig {
    DeliveryConfig::new("service_portfolio", "template_contact", "public_key_123")
}
