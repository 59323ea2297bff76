//! HTML for the coverage wizard steps and the eligibility result.
//!
//! Answers from steps other than the active one ride along as hidden inputs, so every POST carries
//! the whole form and the server keeps no session.

use std::fmt::Write;

use serde_json::Value;

use super::catalog::CONTACT_CONSENT_NOTICE;
use super::html::{bullet_list, escape, hidden_input, link};
use super::layout::render_document;
use super::pages::Page;
use super::SiteContext;
use crate::coverage::{
    CoverageForm, DiabetesType, EligibilityResult, InsuranceType, MonitoringMethod,
    StepValidationError, WizardStep,
};

/// Wire names of the inputs rendered on each step.
pub fn step_fields(step: WizardStep) -> &'static [&'static str] {
    match step {
        WizardStep::Insurance => &["insuranceType"],
        WizardStep::Medical => &[
            "diabetesType",
            "currentMonitoring",
            "hypoglycemicEvents",
            "insulinUse",
        ],
        WizardStep::Doctor => &["hasDoctor", "doctorName", "doctorCity"],
        WizardStep::Card => &["memberId", "insuranceCardFront", "insuranceCardBack"],
        WizardStep::Contact => &[
            "firstName",
            "lastName",
            "email",
            "phone",
            "hipaaConsent",
            "tcpaConsent",
            "benefitsCheckConsent",
        ],
    }
}

fn field_label(field: &str) -> &str {
    match field {
        "insuranceType" => "Insurance type",
        "diabetesType" => "Diabetes type",
        "currentMonitoring" => "Current monitoring method",
        "memberId" => "Member ID",
        "firstName" => "First name",
        "lastName" => "Last name",
        "email" => "Email address",
        "phone" => "Phone number",
        "hipaaConsent" => "HIPAA consent",
        "tcpaConsent" => "TCPA consent",
        "benefitsCheckConsent" => "Benefits check consent",
        other => other,
    }
}

/// Render one wizard step, optionally with the validation error that kept it on screen.
pub fn render_step(
    site: &SiteContext,
    step: WizardStep,
    form: &CoverageForm,
    error: Option<&StepValidationError>,
) -> String {
    let mut body = String::new();
    let percent = step.progress_percent();

    body.push_str("<section class=\"wizard\">");
    let _ = write!(
        body,
        "<header class=\"wizard-progress\"><h1 class=\"step-title\">Check Coverage - Step {} of {}</h1>\
         <span class=\"progress-label\">{}% complete</span>\
         <div class=\"progress\" role=\"progressbar\" aria-valuenow=\"{}\" aria-valuemin=\"0\" aria-valuemax=\"100\">\
         <div class=\"progress-fill\" style=\"width: {}%\"></div></div></header>",
        step.index() + 1,
        WizardStep::COUNT,
        percent,
        percent,
        percent
    );

    if let Some(err) = error {
        render_error(&mut body, err);
    }

    body.push_str("<form method=\"post\" action=\"/check-coverage\" class=\"wizard-form\">");
    hidden_input(&mut body, "step", &step.index().to_string());
    render_carried_answers(&mut body, step, form);

    match step {
        WizardStep::Insurance => insurance_fields(&mut body, form),
        WizardStep::Medical => medical_fields(&mut body, form),
        WizardStep::Doctor => doctor_fields(&mut body, form),
        WizardStep::Card => card_fields(&mut body, form),
        WizardStep::Contact => contact_fields(&mut body, form),
    }

    body.push_str("<div class=\"wizard-nav\">");
    let disabled = if step.is_first() { " disabled" } else { "" };
    let _ = write!(
        body,
        "<button type=\"submit\" name=\"action\" value=\"previous\" formnovalidate{disabled}>Previous</button>"
    );
    let submit_label = if step.is_last() { "Submit" } else { "Next" };
    let _ = write!(
        body,
        "<button type=\"submit\" name=\"action\" value=\"next\" class=\"primary\">{submit_label}</button>"
    );
    body.push_str("</div></form></section>");

    render_document(site, &Page::CheckCoverage.meta(), &body, &[])
}

fn render_error(out: &mut String, err: &StepValidationError) {
    let _ = write!(
        out,
        "<div class=\"form-error\" role=\"alert\"><p>{}</p>",
        escape(&err.to_string())
    );
    let missing = err.missing_fields();
    if !missing.is_empty() {
        let labels: Vec<&str> = missing.iter().map(|field| field_label(field)).collect();
        bullet_list(out, &labels);
    }
    out.push_str("</div>");
}

fn render_carried_answers(out: &mut String, step: WizardStep, form: &CoverageForm) {
    let Ok(Value::Object(answers)) = serde_json::to_value(form) else {
        return;
    };
    let visible = step_fields(step);

    for (name, value) in &answers {
        if visible.contains(&name.as_str()) {
            continue;
        }
        match value {
            Value::String(text) => hidden_input(out, name, text),
            Value::Bool(flag) => hidden_input(out, name, if *flag { "true" } else { "false" }),
            _ => {}
        }
    }
}

fn checked(value: Option<bool>) -> &'static str {
    if value.unwrap_or(false) {
        " checked"
    } else {
        ""
    }
}

fn checkbox(out: &mut String, name: &str, value: Option<bool>, label: &str) {
    let _ = write!(
        out,
        "<label class=\"checkbox\"><input type=\"checkbox\" name=\"{}\" value=\"true\"{}> <span>{}</span></label>",
        escape(name),
        checked(value),
        escape(label)
    );
}

fn text_input(out: &mut String, kind: &str, name: &str, label: &str, value: &Option<String>, placeholder: &str) {
    let _ = write!(
        out,
        "<label for=\"{name}\">{}</label><input type=\"{kind}\" id=\"{name}\" name=\"{name}\" value=\"{}\" placeholder=\"{}\">",
        escape(label),
        escape(value.as_deref().unwrap_or_default()),
        escape(placeholder)
    );
}

fn select(out: &mut String, name: &str, label: &str, prompt: &str, options: &[(&str, &str)], selected: Option<&str>) {
    let _ = write!(
        out,
        "<label for=\"{name}\">{}</label><select id=\"{name}\" name=\"{name}\"><option value=\"\">{}</option>",
        escape(label),
        escape(prompt)
    );
    for (value, text) in options {
        let marker = if Some(*value) == selected { " selected" } else { "" };
        let _ = write!(
            out,
            "<option value=\"{}\"{marker}>{}</option>",
            escape(value),
            escape(text)
        );
    }
    out.push_str("</select>");
}

fn insurance_fields(out: &mut String, form: &CoverageForm) {
    out.push_str("<fieldset><legend><h2>What type of insurance do you have?</h2></legend>");
    for option in InsuranceType::ALL {
        let marker = if form.insurance_type == Some(option) {
            " checked"
        } else {
            ""
        };
        let _ = write!(
            out,
            "<label class=\"option\"><input type=\"radio\" name=\"insuranceType\" value=\"{}\"{marker}>\
             <span class=\"option-label\">{}</span><span class=\"option-description\">{}</span></label>",
            option.value(),
            escape(option.label()),
            escape(option.description())
        );
    }
    out.push_str("</fieldset>");
}

fn medical_fields(out: &mut String, form: &CoverageForm) {
    out.push_str("<fieldset><legend><h2>Tell us about your diabetes</h2></legend>");
    let diabetes: Vec<(&str, &str)> = DiabetesType::ALL
        .iter()
        .map(|option| (option.value(), option.label()))
        .collect();
    select(
        out,
        "diabetesType",
        "Diabetes Type",
        "Select diabetes type",
        &diabetes,
        form.diabetes_type.map(DiabetesType::value),
    );
    let monitoring: Vec<(&str, &str)> = MonitoringMethod::ALL
        .iter()
        .map(|option| (option.value(), option.label()))
        .collect();
    select(
        out,
        "currentMonitoring",
        "Current Monitoring Method",
        "Select monitoring method",
        &monitoring,
        form.current_monitoring.map(MonitoringMethod::value),
    );
    checkbox(
        out,
        "hypoglycemicEvents",
        form.hypoglycemic_events,
        "I have had hypoglycemic events in the past 6 months",
    );
    checkbox(out, "insulinUse", form.insulin_use, "I currently use insulin");
    out.push_str("</fieldset>");
}

fn doctor_fields(out: &mut String, form: &CoverageForm) {
    out.push_str("<fieldset><legend><h2>Doctor Information</h2></legend>");
    checkbox(
        out,
        "hasDoctor",
        form.has_doctor,
        "I have a doctor who manages my diabetes",
    );
    text_input(out, "text", "doctorName", "Doctor's Name", &form.doctor_name, "Dr. Smith");
    text_input(out, "text", "doctorCity", "City", &form.doctor_city, "New York");
    out.push_str("</fieldset>");
}

fn card_fields(out: &mut String, form: &CoverageForm) {
    if form.insurance_type == Some(InsuranceType::None) {
        out.push_str(
            "<fieldset><legend><h2>Insurance Card Information</h2></legend>\
             <p>No insurance card is needed for cash pay. Continue to the next step.</p></fieldset>",
        );
        return;
    }

    out.push_str("<fieldset><legend><h2>Insurance Card Information</h2></legend>");
    text_input(out, "text", "memberId", "Member ID", &form.member_id, "Enter your member ID");
    for (name, label) in [
        ("insuranceCardFront", "Insurance Card (Front)"),
        ("insuranceCardBack", "Insurance Card (Back)"),
    ] {
        let _ = write!(
            out,
            "<label for=\"{name}\">{}</label><input type=\"file\" id=\"{name}\" name=\"{name}\" accept=\"image/*\">",
            escape(label)
        );
    }
    out.push_str("</fieldset>");
}

fn contact_fields(out: &mut String, form: &CoverageForm) {
    out.push_str("<fieldset><legend><h2>Contact Information &amp; Consent</h2></legend>");
    text_input(out, "text", "firstName", "First Name", &form.first_name, "");
    text_input(out, "text", "lastName", "Last Name", &form.last_name, "");
    text_input(out, "email", "email", "Email Address", &form.email, "");
    text_input(out, "tel", "phone", "Phone Number", &form.phone, "(555) 123-4567");

    out.push_str("<h3>Required Consents</h3>");
    checkbox(
        out,
        "hipaaConsent",
        form.hipaa_consent,
        "I consent to the use and disclosure of my protected health information as described in the HIPAA Notice of Privacy Practices.",
    );
    checkbox(
        out,
        "tcpaConsent",
        form.tcpa_consent,
        "I consent to receive calls and text messages at the number provided, including via autodialer and prerecorded messages.",
    );
    checkbox(
        out,
        "benefitsCheckConsent",
        form.benefits_check_consent,
        "I authorize CGM Care to check my insurance benefits and coordinate with my healthcare provider.",
    );
    let _ = write!(out, "<p class=\"fine-print\">{}</p>", escape(CONTACT_CONSENT_NOTICE));
    out.push_str("</fieldset>");
}

/// Final page of the wizard.
pub fn render_result(site: &SiteContext, result: &EligibilityResult) -> String {
    let mut body = String::new();
    let class = if result.eligible { "eligible" } else { "not-eligible" };
    let _ = write!(
        body,
        "<section class=\"wizard-result {class}\"><h2>{}</h2>",
        escape(result.headline())
    );

    if result.eligible {
        body.push_str(
            "<p>Pending benefits check (under 1 business day). We'll contact you with next steps.</p>",
        );
        let steps: Vec<&str> = result.next_steps.iter().map(String::as_str).collect();
        body.push_str("<h3>Next steps</h3>");
        bullet_list(&mut body, &steps);
        if !result.required_documents.is_empty() {
            let documents: Vec<&str> = result
                .required_documents
                .iter()
                .map(String::as_str)
                .collect();
            body.push_str("<h3>Have these ready</h3>");
            bullet_list(&mut body, &documents);
        }
        link(&mut body, "/patient-portal", "Access Patient Portal", "button primary");
    } else {
        body.push_str("<p>Don't worry! We have cash-pay options available.</p>");
        if let Some(detail) = &result.reason_detail {
            let _ = write!(body, "<p class=\"reason\">{}</p>", escape(detail));
        }
        if !result.cash_pay_options.is_empty() {
            body.push_str("<table class=\"cash-pay\"><thead><tr><th>Device</th><th>Price</th><th>Sensors</th></tr></thead><tbody>");
            for option in &result.cash_pay_options {
                let popular = if option.popular { " <span class=\"badge\">Most Popular</span>" } else { "" };
                let _ = write!(
                    body,
                    "<tr><th scope=\"row\">{}{popular}</th><td>{}</td><td>{}</td></tr>",
                    escape(&option.name),
                    escape(&option.price),
                    escape(&option.monthly)
                );
            }
            body.push_str("</tbody></table>");
        }
        link(&mut body, "/pricing", "View Cash-Pay Options", "button primary");
        link(&mut body, "/about#contact", "Talk to Advisor", "button");
    }
    body.push_str("</section>");

    render_document(site, &Page::CheckCoverage.meta(), &body, &[])
}
