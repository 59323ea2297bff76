use serde::Deserialize;

use super::domain::{CoverageForm, DiabetesType, InsuranceType, MonitoringMethod};
use super::wizard::WizardAction;

/// Raw `application/x-www-form-urlencoded` body posted by the server-rendered wizard.
///
/// Answers from earlier steps travel as hidden inputs, so the posted body is the whole form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WizardFormFields {
    pub step: Option<String>,
    pub action: Option<String>,

    pub insurance_type: Option<String>,
    pub diabetes_type: Option<String>,
    pub current_monitoring: Option<String>,
    pub hypoglycemic_events: Option<String>,
    pub insulin_use: Option<String>,
    pub has_doctor: Option<String>,
    pub doctor_name: Option<String>,
    pub doctor_city: Option<String>,
    pub member_id: Option<String>,
    pub insurance_card_front: Option<String>,
    pub insurance_card_back: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hipaa_consent: Option<String>,
    pub tcpa_consent: Option<String>,
    pub benefits_check_consent: Option<String>,
}

impl WizardFormFields {
    /// Split the body into the posted step index, the requested action, and the answers.
    pub fn into_parts(self) -> (usize, WizardAction, CoverageForm) {
        let step = self
            .step
            .as_deref()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .unwrap_or(0);
        let action = self
            .action
            .as_deref()
            .map(WizardAction::from_value)
            .unwrap_or_default();

        let form = CoverageForm {
            insurance_type: choice(self.insurance_type, InsuranceType::from_value),
            diabetes_type: choice(self.diabetes_type, DiabetesType::from_value),
            current_monitoring: choice(self.current_monitoring, MonitoringMethod::from_value),
            hypoglycemic_events: checkbox(self.hypoglycemic_events),
            insulin_use: checkbox(self.insulin_use),
            has_doctor: checkbox(self.has_doctor),
            doctor_name: text(self.doctor_name),
            doctor_city: text(self.doctor_city),
            member_id: text(self.member_id),
            insurance_card_front: text(self.insurance_card_front),
            insurance_card_back: text(self.insurance_card_back),
            first_name: text(self.first_name),
            last_name: text(self.last_name),
            email: text(self.email),
            phone: text(self.phone),
            hipaa_consent: checkbox(self.hipaa_consent),
            tcpa_consent: checkbox(self.tcpa_consent),
            benefits_check_consent: checkbox(self.benefits_check_consent),
        };

        (step, action, form)
    }
}

fn text(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn choice<T>(raw: Option<String>, parse: fn(&str) -> Option<T>) -> Option<T> {
    raw.as_deref().and_then(parse)
}

/// Browsers send `on` for a ticked box and nothing otherwise; hidden carries use `true`/`false`.
fn checkbox(raw: Option<String>) -> Option<bool> {
    let value = raw?;
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
