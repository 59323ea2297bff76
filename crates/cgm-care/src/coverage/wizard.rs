use serde::{Deserialize, Serialize};

use super::domain::{has_text, is_checked, CoverageForm, InsuranceType, WizardStep};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields before proceeding.";

/// Validation failures raised while moving through the wizard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepValidationError {
    #[error("Please fill in all required fields before proceeding.")]
    MissingFields {
        step: WizardStep,
        fields: Vec<&'static str>,
    },
    #[error("unknown wizard step index {0}")]
    UnknownStep(usize),
}

impl StepValidationError {
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            StepValidationError::MissingFields { fields, .. } => fields,
            StepValidationError::UnknownStep(_) => &[],
        }
    }
}

/// Navigation requested from the active step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardAction {
    #[default]
    Next,
    Previous,
}

impl WizardAction {
    pub fn from_value(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("previous") {
            Self::Previous
        } else {
            Self::Next
        }
    }
}

/// Result of a successful `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardTransition {
    Advanced(WizardStep),
    Completed,
}

/// Required fields of `step`, checked against the accumulated answers.
pub fn missing_fields(step: WizardStep, form: &CoverageForm) -> Vec<&'static str> {
    let mut missing = Vec::new();

    match step {
        WizardStep::Insurance => {
            if form.insurance_type.is_none() {
                missing.push("insuranceType");
            }
        }
        WizardStep::Medical => {
            if form.diabetes_type.is_none() {
                missing.push("diabetesType");
            }
            if form.current_monitoring.is_none() {
                missing.push("currentMonitoring");
            }
        }
        WizardStep::Doctor => {}
        WizardStep::Card => {
            if form.insurance_type != Some(InsuranceType::None) && !has_text(&form.member_id) {
                missing.push("memberId");
            }
        }
        WizardStep::Contact => {
            for (name, value) in [
                ("firstName", &form.first_name),
                ("lastName", &form.last_name),
                ("email", &form.email),
                ("phone", &form.phone),
            ] {
                if !has_text(value) {
                    missing.push(name);
                }
            }
            for (name, value) in [
                ("hipaaConsent", form.hipaa_consent),
                ("tcpaConsent", form.tcpa_consent),
                ("benefitsCheckConsent", form.benefits_check_consent),
            ] {
                if !is_checked(value) {
                    missing.push(name);
                }
            }
        }
    }

    missing
}

pub fn validate_step(step: WizardStep, form: &CoverageForm) -> Result<(), StepValidationError> {
    let fields = missing_fields(step, form);
    if fields.is_empty() {
        Ok(())
    } else {
        Err(StepValidationError::MissingFields { step, fields })
    }
}

/// Linear five-step coverage wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageWizard {
    step: WizardStep,
    form: CoverageForm,
}

impl Default for CoverageWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverageWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Insurance,
            form: CoverageForm::default(),
        }
    }

    /// Pick up a wizard whose state was carried by the client.
    pub fn resume(step_index: usize, form: CoverageForm) -> Result<Self, StepValidationError> {
        let step =
            WizardStep::from_index(step_index).ok_or(StepValidationError::UnknownStep(step_index))?;
        Ok(Self { step, form })
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &CoverageForm {
        &self.form
    }

    pub fn into_form(self) -> CoverageForm {
        self.form
    }

    pub fn progress_percent(&self) -> u8 {
        self.step.progress_percent()
    }

    /// Merge the step's answers and move forward when the active step is complete.
    ///
    /// Answers are kept even when validation fails so the re-rendered step shows them again.
    pub fn advance(
        &mut self,
        step_data: CoverageForm,
    ) -> Result<WizardTransition, StepValidationError> {
        self.form.merge(step_data);
        validate_step(self.step, &self.form)?;

        match self.step.next() {
            Some(next) => {
                self.step = next;
                Ok(WizardTransition::Advanced(next))
            }
            None => Ok(WizardTransition::Completed),
        }
    }

    /// Keep whatever was entered on the active step and move back one step.
    pub fn retreat(&mut self, step_data: CoverageForm) -> WizardStep {
        self.form.merge(step_data);
        self.back()
    }

    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }
}
