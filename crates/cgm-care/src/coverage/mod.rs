//! Coverage check intake: the five-step wizard, the eligibility rule, and form delivery.

pub mod domain;
pub mod eligibility;
pub mod form_input;
pub mod router;
pub mod service;
pub mod submission;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use domain::{CoverageForm, DiabetesType, InsuranceType, MonitoringMethod, WizardStep};
pub use eligibility::{
    assess, determine_eligibility, ineligibility_reason, CashPayOption, EligibilityResult,
    IneligibilityReason,
};
pub use form_input::WizardFormFields;
pub use router::{coverage_router, WizardRequest, WizardResponse};
pub use service::{CoverageOutcome, CoverageService};
pub use submission::{
    DeliveryOutcome, FallbackError, FallbackStore, SubmissionEndpoint, SubmissionError,
    SubmissionReceipt, SubmissionSink, FALLBACK_STORAGE_KEY,
};
pub use wizard::{CoverageWizard, StepValidationError, WizardAction, WizardTransition};
