use serde::{Deserialize, Serialize};

use super::domain::{is_checked, CoverageForm, DiabetesType, InsuranceType};
use crate::content::catalog::{format_usd, CGM_DEVICES};

/// First rule that rules a form out of insurance coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IneligibilityReason {
    NoInsurance,
    UnsupportedDiabetesType,
    Type1WithoutInsulin,
}

impl IneligibilityReason {
    pub const fn summary(self) -> &'static str {
        match self {
            IneligibilityReason::NoInsurance => "no insurance on file; cash-pay pricing applies",
            IneligibilityReason::UnsupportedDiabetesType => {
                "other or pre-diabetes diagnoses are not covered by supported plans"
            }
            IneligibilityReason::Type1WithoutInsulin => {
                "type 1 coverage requires current insulin use"
            }
        }
    }
}

/// Rule order matters only for the reported reason; any match makes the form ineligible.
pub fn ineligibility_reason(form: &CoverageForm) -> Option<IneligibilityReason> {
    if form.insurance_type == Some(InsuranceType::None) {
        return Some(IneligibilityReason::NoInsurance);
    }

    if form.diabetes_type == Some(DiabetesType::Other) {
        return Some(IneligibilityReason::UnsupportedDiabetesType);
    }

    if form.diabetes_type == Some(DiabetesType::Type1) && !is_checked(form.insulin_use) {
        return Some(IneligibilityReason::Type1WithoutInsulin);
    }

    None
}

/// Likely-eligible check shown at the end of the wizard, pending a real benefits check.
pub fn determine_eligibility(form: &CoverageForm) -> bool {
    ineligibility_reason(form).is_none()
}

/// Cash-pay device offered to patients who are not covered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashPayOption {
    pub name: String,
    pub price: String,
    pub monthly: String,
    pub popular: bool,
}

/// Detailed outcome rendered on the result page and returned by the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<IneligibilityReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_detail: Option<String>,
    pub next_steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_timeline: Option<String>,
    pub required_documents: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cash_pay_options: Vec<CashPayOption>,
}

impl EligibilityResult {
    pub fn headline(&self) -> &'static str {
        if self.eligible {
            "You're likely eligible!"
        } else {
            "Not eligible for insurance coverage"
        }
    }
}

pub fn assess(form: &CoverageForm) -> EligibilityResult {
    match ineligibility_reason(form) {
        None => eligible_result(form),
        Some(reason) => ineligible_result(reason),
    }
}

fn eligible_result(form: &CoverageForm) -> EligibilityResult {
    let mut next_steps = vec![
        "Pending benefits check (under 1 business day)".to_string(),
        "We'll contact you with next steps".to_string(),
    ];
    if is_checked(form.has_doctor) {
        next_steps.push("We'll coordinate the prescription with your doctor".to_string());
    } else {
        next_steps.push("We'll help you connect with a prescribing clinician".to_string());
    }
    next_steps.push("Track your application in the patient portal".to_string());

    let mut required_documents = Vec::new();
    if form.is_insured() {
        required_documents.push("Insurance card (front and back)".to_string());
        required_documents.push("Member ID number".to_string());
    }
    required_documents.push("Prescription from your doctor".to_string());

    EligibilityResult {
        eligible: true,
        reason: None,
        reason_detail: None,
        next_steps,
        estimated_timeline: Some(
            "Benefits check in under 1 business day; most approvals within 1-3 business days"
                .to_string(),
        ),
        required_documents,
        cash_pay_options: Vec::new(),
    }
}

fn ineligible_result(reason: IneligibilityReason) -> EligibilityResult {
    let cash_pay_options = CGM_DEVICES
        .iter()
        .map(|device| CashPayOption {
            name: device.name.to_string(),
            price: format_usd(device.price_cents),
            monthly: format!("{}/month", format_usd(device.monthly_cents)),
            popular: device.popular,
        })
        .collect();

    EligibilityResult {
        eligible: false,
        reason: Some(reason),
        reason_detail: Some(reason.summary().to_string()),
        next_steps: vec![
            "View cash-pay options".to_string(),
            "Talk to an advisor about HSA/FSA payment and payment plans".to_string(),
        ],
        estimated_timeline: None,
        required_documents: Vec::new(),
        cash_pay_options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(
        insurance: Option<InsuranceType>,
        diabetes: Option<DiabetesType>,
        insulin: Option<bool>,
    ) -> CoverageForm {
        CoverageForm {
            insurance_type: insurance,
            diabetes_type: diabetes,
            insulin_use: insulin,
            ..CoverageForm::default()
        }
    }

    #[test]
    fn no_insurance_is_never_eligible() {
        for diabetes in DiabetesType::ALL {
            let candidate = form(Some(InsuranceType::None), Some(diabetes), Some(true));
            assert!(!determine_eligibility(&candidate));
            assert_eq!(
                ineligibility_reason(&candidate),
                Some(IneligibilityReason::NoInsurance)
            );
        }
    }

    #[test]
    fn other_diabetes_type_is_not_eligible() {
        let candidate = form(Some(InsuranceType::Medicare), Some(DiabetesType::Other), Some(true));
        assert!(!determine_eligibility(&candidate));
        assert_eq!(
            ineligibility_reason(&candidate),
            Some(IneligibilityReason::UnsupportedDiabetesType)
        );
    }

    #[test]
    fn type1_requires_insulin_use() {
        let unset = form(Some(InsuranceType::Ppo), Some(DiabetesType::Type1), None);
        let declined = form(Some(InsuranceType::Ppo), Some(DiabetesType::Type1), Some(false));
        let using = form(Some(InsuranceType::Ppo), Some(DiabetesType::Type1), Some(true));

        assert!(!determine_eligibility(&unset));
        assert!(!determine_eligibility(&declined));
        assert!(determine_eligibility(&using));
    }

    #[test]
    fn remaining_combinations_are_eligible() {
        for insurance in [InsuranceType::Medicare, InsuranceType::Ppo] {
            for diabetes in [DiabetesType::Type2, DiabetesType::Gestational] {
                for insulin in [None, Some(false), Some(true)] {
                    assert!(determine_eligibility(&form(
                        Some(insurance),
                        Some(diabetes),
                        insulin
                    )));
                }
            }
        }

        assert!(determine_eligibility(&CoverageForm::default()));
    }

    #[test]
    fn assessment_lists_documents_for_insured_patients() {
        let mut candidate = form(
            Some(InsuranceType::Medicare),
            Some(DiabetesType::Type2),
            Some(false),
        );
        candidate.has_doctor = Some(true);

        let result = assess(&candidate);
        assert!(result.eligible);
        assert!(result.reason.is_none());
        assert!(result.cash_pay_options.is_empty());
        assert!(result
            .required_documents
            .iter()
            .any(|doc| doc.contains("Insurance card")));
        assert!(result
            .next_steps
            .iter()
            .any(|step| step.contains("under 1 business day")));
        assert!(result.next_steps.iter().any(|step| step.contains("your doctor")));
    }

    #[test]
    fn ineligible_assessment_offers_cash_pay_devices() {
        let result = assess(&form(Some(InsuranceType::None), None, None));
        assert!(!result.eligible);
        assert_eq!(result.reason, Some(IneligibilityReason::NoInsurance));
        assert_eq!(result.cash_pay_options.len(), CGM_DEVICES.len());

        let g7 = result
            .cash_pay_options
            .iter()
            .find(|option| option.name == "Dexcom G7")
            .expect("G7 offered");
        assert_eq!(g7.price, "$299");
        assert_eq!(g7.monthly, "$89/month");
        assert!(g7.popular);
    }
}
