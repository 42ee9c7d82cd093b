use std::sync::Arc;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use folio_contact::Delivery;

use crate::template::{NotFoundTemplate, Template};

mod contact;
mod health;
mod index;

pub use index::{HIGHLIGHTS, Highlight, IndexTemplate};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub delivery: Arc<dyn Delivery>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            site: &template.site,
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", get(contact::page).post(contact::action))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
