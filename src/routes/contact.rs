use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use folio_contact::{ContactSubmission, FormState, SubmissionStatus};
use validator::Validate;

use crate::{
    routes::{AppState, IndexTemplate},
    template::Template,
};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all fields.";

pub async fn page() -> impl IntoResponse {
    Redirect::to("/#contact")
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<FormState>,
) -> impl IntoResponse {
    if let Err(err) = input.validate() {
        tracing::debug!(error = %err, "Contact form rejected before submission");

        return template.render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            IndexTemplate::new(
                &template.site,
                input,
                SubmissionStatus::Error(REQUIRED_FIELDS_MESSAGE.to_owned()),
            ),
        );
    }

    let mut submission = ContactSubmission::new(input);
    submission
        .submit(
            &app_state.config.emailjs.delivery_config(),
            app_state.delivery.as_ref(),
        )
        .await;

    template.render(IndexTemplate::new(
        &template.site,
        submission.form,
        submission.status,
    ))
}
