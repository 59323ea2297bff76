use serde::{Deserialize, Serialize};

/// Plan family declared on the first wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsuranceType {
    Medicare,
    Ppo,
    None,
}

impl InsuranceType {
    pub const ALL: [InsuranceType; 3] = [Self::Medicare, Self::Ppo, Self::None];

    pub const fn value(self) -> &'static str {
        match self {
            InsuranceType::Medicare => "medicare",
            InsuranceType::Ppo => "ppo",
            InsuranceType::None => "none",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            InsuranceType::Medicare => "Medicare Part B",
            InsuranceType::Ppo => "PPO Insurance",
            InsuranceType::None => "No Insurance / Cash Pay",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            InsuranceType::Medicare => "Traditional Medicare with Part B coverage",
            InsuranceType::Ppo => "Preferred Provider Organization plan",
            InsuranceType::None => "I will pay out of pocket",
        }
    }

    pub fn from_value(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|option| option.value().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiabetesType {
    Type1,
    Type2,
    Gestational,
    Other,
}

impl DiabetesType {
    pub const ALL: [DiabetesType; 4] = [Self::Type1, Self::Type2, Self::Gestational, Self::Other];

    pub const fn value(self) -> &'static str {
        match self {
            DiabetesType::Type1 => "type1",
            DiabetesType::Type2 => "type2",
            DiabetesType::Gestational => "gestational",
            DiabetesType::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DiabetesType::Type1 => "Type 1 Diabetes",
            DiabetesType::Type2 => "Type 2 Diabetes",
            DiabetesType::Gestational => "Gestational Diabetes",
            DiabetesType::Other => "Other/Pre-diabetes",
        }
    }

    pub fn from_value(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|option| option.value().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitoringMethod {
    Fingersticks,
    Cgm,
    Both,
    None,
}

impl MonitoringMethod {
    pub const ALL: [MonitoringMethod; 4] = [Self::Fingersticks, Self::Cgm, Self::Both, Self::None];

    pub const fn value(self) -> &'static str {
        match self {
            MonitoringMethod::Fingersticks => "fingersticks",
            MonitoringMethod::Cgm => "cgm",
            MonitoringMethod::Both => "both",
            MonitoringMethod::None => "none",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MonitoringMethod::Fingersticks => "Fingerstick testing only",
            MonitoringMethod::Cgm => "CGM (Continuous Glucose Monitor)",
            MonitoringMethod::Both => "Both fingersticks and CGM",
            MonitoringMethod::None => "No regular monitoring",
        }
    }

    pub fn from_value(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|option| option.value().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Answers collected by the coverage wizard.
///
/// Every field is optional: the form is filled in step by step and only the active step's fields
/// are required to move forward. The wire shape uses the camelCase names posted by the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoverageForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_type: Option<InsuranceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diabetes_type: Option<DiabetesType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_monitoring: Option<MonitoringMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypoglycemic_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insulin_use: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_doctor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    /// Client-side file names only; card images are never uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_card_front: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_card_back: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hipaa_consent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcpa_consent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits_check_consent: Option<bool>,
}

macro_rules! overlay_fields {
    ($target:expr, $source:expr; $($field:ident),+ $(,)?) => {
        $(
            if $source.$field.is_some() {
                $target.$field = $source.$field;
            }
        )+
    };
}

impl CoverageForm {
    /// Overlay the answers from `other`; fields it leaves unset keep their current value.
    pub fn merge(&mut self, other: CoverageForm) {
        overlay_fields!(self, other;
            insurance_type,
            diabetes_type,
            current_monitoring,
            hypoglycemic_events,
            insulin_use,
            has_doctor,
            doctor_name,
            doctor_city,
            member_id,
            insurance_card_front,
            insurance_card_back,
            first_name,
            last_name,
            email,
            phone,
            hipaa_consent,
            tcpa_consent,
            benefits_check_consent,
        );
    }

    pub fn is_insured(&self) -> bool {
        matches!(
            self.insurance_type,
            Some(InsuranceType::Medicare | InsuranceType::Ppo)
        )
    }
}

/// A text answer counts as present when it holds anything besides whitespace.
pub(crate) fn has_text(value: &Option<String>) -> bool {
    value
        .as_deref()
        .map(|text| !text.trim().is_empty())
        .unwrap_or(false)
}

pub(crate) fn is_checked(value: Option<bool>) -> bool {
    value.unwrap_or(false)
}

/// Fixed, linear order of the coverage wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Insurance,
    Medical,
    Doctor,
    Card,
    Contact,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        Self::Insurance,
        Self::Medical,
        Self::Doctor,
        Self::Card,
        Self::Contact,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn index(self) -> usize {
        match self {
            WizardStep::Insurance => 0,
            WizardStep::Medical => 1,
            WizardStep::Doctor => 2,
            WizardStep::Card => 3,
            WizardStep::Contact => 4,
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            WizardStep::Insurance => "insurance",
            WizardStep::Medical => "medical",
            WizardStep::Doctor => "doctor",
            WizardStep::Card => "card",
            WizardStep::Contact => "contact",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            WizardStep::Insurance => "Insurance Type",
            WizardStep::Medical => "Medical Info",
            WizardStep::Doctor => "Doctor Info",
            WizardStep::Card => "Insurance Card",
            WizardStep::Contact => "Contact & Consent",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_first(self) -> bool {
        self.index() == 0
    }

    pub fn is_last(self) -> bool {
        self.index() + 1 == Self::COUNT
    }

    /// Rounded completion percentage shown in the progress bar.
    pub fn progress_percent(self) -> u8 {
        let numerator = (self.index() + 1) * 200 + Self::COUNT;
        (numerator / (2 * Self::COUNT)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn form_uses_camel_case_wire_names() {
        let form: CoverageForm = serde_json::from_value(json!({
            "insuranceType": "ppo",
            "diabetesType": "type1",
            "currentMonitoring": "both",
            "insulinUse": true,
            "memberId": "XZ-1182",
            "benefitsCheckConsent": true
        }))
        .expect("form deserializes");

        assert_eq!(form.insurance_type, Some(InsuranceType::Ppo));
        assert_eq!(form.diabetes_type, Some(DiabetesType::Type1));
        assert_eq!(form.current_monitoring, Some(MonitoringMethod::Both));
        assert_eq!(form.insulin_use, Some(true));
        assert_eq!(form.member_id.as_deref(), Some("XZ-1182"));
        assert_eq!(form.benefits_check_consent, Some(true));
        assert!(form.first_name.is_none());

        let value = serde_json::to_value(&form).expect("form serializes");
        assert_eq!(value.get("insuranceType"), Some(&json!("ppo")));
        assert!(value.get("firstName").is_none());
    }

    #[test]
    fn merge_keeps_earlier_answers_and_overrides_with_later_ones() {
        let mut form = CoverageForm {
            insurance_type: Some(InsuranceType::Medicare),
            diabetes_type: Some(DiabetesType::Type2),
            ..CoverageForm::default()
        };

        form.merge(CoverageForm {
            diabetes_type: Some(DiabetesType::Type1),
            insulin_use: Some(true),
            ..CoverageForm::default()
        });

        assert_eq!(form.insurance_type, Some(InsuranceType::Medicare));
        assert_eq!(form.diabetes_type, Some(DiabetesType::Type1));
        assert_eq!(form.insulin_use, Some(true));
    }

    #[test]
    fn steps_walk_in_fixed_order() {
        let ids: Vec<_> = WizardStep::ALL.iter().map(|step| step.id()).collect();
        assert_eq!(ids, ["insurance", "medical", "doctor", "card", "contact"]);
        assert_eq!(WizardStep::Insurance.previous(), None);
        assert_eq!(WizardStep::Contact.next(), None);
        assert_eq!(WizardStep::Doctor.next(), Some(WizardStep::Card));
        assert_eq!(WizardStep::from_index(5), None);

        let progress: Vec<_> = WizardStep::ALL
            .iter()
            .map(|step| step.progress_percent())
            .collect();
        assert_eq!(progress, [20, 40, 60, 80, 100]);
    }

    #[test]
    fn option_values_parse_case_insensitively() {
        assert_eq!(InsuranceType::from_value(" PPO "), Some(InsuranceType::Ppo));
        assert_eq!(DiabetesType::from_value("gestational"), Some(DiabetesType::Gestational));
        assert_eq!(MonitoringMethod::from_value("cgm"), Some(MonitoringMethod::Cgm));
        assert_eq!(InsuranceType::from_value(""), None);
    }
}
