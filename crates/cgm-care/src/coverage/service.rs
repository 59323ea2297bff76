use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use super::domain::CoverageForm;
use super::eligibility::{assess, EligibilityResult};
use super::submission::{
    DeliveryOutcome, FallbackStore, SubmissionEndpoint, SubmissionReceipt, SubmissionSink,
    FALLBACK_STORAGE_KEY,
};
use super::wizard::{CoverageWizard, StepValidationError, WizardAction, WizardTransition};

/// Eligibility shown to the patient plus what happened to their answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageOutcome {
    pub eligibility: EligibilityResult,
    pub delivery: DeliveryOutcome,
}

/// Service composing the wizard, the eligibility rule, and form delivery.
pub struct CoverageService<S, F> {
    sink: Arc<S>,
    fallback: Arc<F>,
    endpoint: SubmissionEndpoint,
}

impl<S, F> CoverageService<S, F>
where
    S: SubmissionSink + 'static,
    F: FallbackStore + 'static,
{
    pub fn new(sink: Arc<S>, fallback: Arc<F>, processing_delay: Duration) -> Self {
        Self {
            sink,
            fallback,
            endpoint: SubmissionEndpoint::new(processing_delay),
        }
    }

    pub fn processing_delay(&self) -> Duration {
        self.endpoint.processing_delay()
    }

    /// Apply one navigation request to the wizard.
    ///
    /// Returns `Ok(None)` when the wizard moved to another step and `Ok(Some(_))` once the last
    /// step was accepted. On a validation error the wizard stays on its step with the merged answers.
    pub async fn step(
        &self,
        wizard: &mut CoverageWizard,
        action: WizardAction,
        step_data: CoverageForm,
    ) -> Result<Option<CoverageOutcome>, StepValidationError> {
        let from = wizard.current_step();

        match action {
            WizardAction::Previous => {
                let to = wizard.retreat(step_data);
                info!(from = from.id(), to = to.id(), "coverage wizard moved back");
                Ok(None)
            }
            WizardAction::Next => match wizard.advance(step_data) {
                Ok(WizardTransition::Advanced(to)) => {
                    info!(from = from.id(), to = to.id(), "coverage wizard advanced");
                    Ok(None)
                }
                Ok(WizardTransition::Completed) => Ok(Some(self.complete(wizard.form()).await)),
                Err(err) => {
                    info!(
                        step = from.id(),
                        missing = ?err.missing_fields(),
                        "coverage wizard step incomplete"
                    );
                    Err(err)
                }
            },
        }
    }

    /// Decide eligibility and hand the answers off once; failures fall back to local storage.
    pub async fn complete(&self, form: &CoverageForm) -> CoverageOutcome {
        let eligibility = assess(form);

        let delivery = match serde_json::to_value(form) {
            Ok(payload) => self.deliver(payload).await,
            Err(err) => DeliveryOutcome::Dropped {
                reason: err.to_string(),
            },
        };

        info!(
            eligible = eligibility.eligible,
            reason = ?eligibility.reason,
            delivery = delivery.status_label(),
            "coverage check completed"
        );

        CoverageOutcome {
            eligibility,
            delivery,
        }
    }

    async fn deliver(&self, payload: Value) -> DeliveryOutcome {
        match self.sink.deliver(&payload).await {
            Ok(receipt) if receipt.success => DeliveryOutcome::Delivered { receipt },
            Ok(receipt) => {
                error!(message = %receipt.message, "coverage submission was not accepted");
                DeliveryOutcome::Rejected {
                    message: receipt.message,
                }
            }
            Err(err) => {
                warn!(error = %err, "coverage submission failed; storing form locally");
                match self
                    .fallback
                    .set_item(FALLBACK_STORAGE_KEY, payload.to_string())
                {
                    Ok(()) => DeliveryOutcome::StoredLocally {
                        key: FALLBACK_STORAGE_KEY,
                    },
                    Err(store_err) => {
                        error!(error = %store_err, "coverage form could not be stored locally");
                        DeliveryOutcome::Dropped {
                            reason: store_err.to_string(),
                        }
                    }
                }
            }
        }
    }

    /// Accept a raw submission body: parse, log, wait out the processing delay, and echo it back.
    pub async fn receive(&self, body: &[u8]) -> Result<SubmissionReceipt, serde_json::Error> {
        self.endpoint.receive(body).await
    }
}
