use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tracing::{error, info, warn};

use crate::{
    Delivery, DeliveryConfig, FormState, SUCCESS_MESSAGE, SubmissionStatus, SubmitError,
};

/// Shared view of whether a submission is in flight.
///
/// Clones observe the same flag, so the page (or a test double) can read it
/// while the delivery call is suspended.
#[derive(Clone, Debug, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn acquire(&self) -> BusyGuard {
        self.0.store(true, Ordering::SeqCst);
        BusyGuard(self.clone())
    }
}

/// Clears the flag when dropped.
struct BusyGuard(BusyFlag);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.0.store(false, Ordering::SeqCst);
    }
}

/// View state of the contact form: field values, last result and busy flag.
#[derive(Debug, Default)]
pub struct ContactSubmission {
    pub form: FormState,
    pub status: SubmissionStatus,
    busy: BusyFlag,
}

impl ContactSubmission {
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    pub fn busy(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Runs one submission attempt and records its outcome.
    ///
    /// The form is reset only when the collaborator accepts the message.
    /// No retry is attempted and concurrent calls are not rejected.
    pub async fn submit(
        &mut self,
        config: &DeliveryConfig,
        delivery: &dyn Delivery,
    ) -> &SubmissionStatus {
        let _guard = self.busy.acquire();
        self.status = SubmissionStatus::Idle;

        self.status = match send(&self.form, config, delivery).await {
            Ok(()) => {
                self.form.reset();
                SubmissionStatus::Success(SUCCESS_MESSAGE.to_owned())
            }
            Err(err) => err.into(),
        };

        &self.status
    }
}

/// Checks the delivery configuration and hands the form to the collaborator.
#[tracing::instrument(skip_all)]
pub async fn send(
    form: &FormState,
    config: &DeliveryConfig,
    delivery: &dyn Delivery,
) -> Result<(), SubmitError> {
    if !config.is_complete() {
        warn!(
            service_id = !config.service_id.is_empty(),
            template_id = !config.template_id.is_empty(),
            public_key = !config.public_key.is_empty(),
            "Contact delivery configuration is missing"
        );

        return Err(SubmitError::ConfigurationMissing);
    }

    if let Err(err) = delivery
        .send(
            &config.service_id,
            &config.template_id,
            &form.to_params(),
            &config.public_key,
        )
        .await
    {
        error!(error = %err, "Contact message delivery failed");

        return Err(err.into());
    }

    info!(
        template_id = %config.template_id,
        "Contact message delivered"
    );

    Ok(())
}
