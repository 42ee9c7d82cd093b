#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use folio::{
    AppState,
    config::{Config, EmailJsConfig, ObservabilityConfig, ServerConfig, SiteConfig},
};
use folio_contact::{Delivery, DeliveryError, TemplateParams};
use http_body_util::BodyExt;

/// Delivery double recording the payloads it receives.
pub struct RecordingDelivery {
    outcome: Result<(), DeliveryError>,
    pub sent: Mutex<Vec<TemplateParams>>,
}

impl RecordingDelivery {
    pub fn succeed() -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(()),
            sent: Mutex::new(vec![]),
        })
    }

    pub fn fail(err: DeliveryError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(err),
            sent: Mutex::new(vec![]),
        })
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Delivery for RecordingDelivery {
    async fn send(
        &self,
        _service_id: &str,
        _template_id: &str,
        params: &TemplateParams,
        _public_key: &str,
    ) -> Result<(), DeliveryError> {
        self.sent.lock().unwrap().push(params.clone());
        self.outcome.clone()
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        emailjs: EmailJsConfig {
            service_id: "service_portfolio".to_string(),
            template_id: "template_contact".to_string(),
            public_key: "public_key_123".to_string(),
            ..Default::default()
        },
        site: SiteConfig {
            owner_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 (20) 555-0100".to_string(),
            location: "London, UK".to_string(),
            ..Default::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn create_test_app(config: Config, delivery: Arc<RecordingDelivery>) -> Router {
    folio::app(AppState { config, delivery })
}

pub fn post_contact(fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
