use std::fmt::Write;

use serde::Serialize;

use super::catalog::{
    format_usd, ADVANCED_DEVICE_BENEFITS, CGM_DEVICES, CLINIC_BENEFITS, CLINIC_SERVICES,
    COMPLIANCE_EMAIL, COMPLIANCE_SECTIONS, CONTACT_CHANNELS, DATA_SECURITY_MEASURES,
    DOCTOR_COORDINATION_STEPS, FAQ, FULFILMENT_TIMELINE, LEGAL_DOCUMENTS, PATIENT_PORTAL_PREVIEW,
    PAYMENT_OPTIONS, PLAN_COVERAGE_RULES, PROCESS_STEPS, PROVIDER_PORTAL_MODULES,
    PUMP_AND_SENSOR_FAMILIES, REFERRAL_KIT, REQUIRED_INFORMATION, STATES_SERVED,
    SUPPLY_CATEGORIES, SUPPLY_PRICE_LIST, SUPPORT_HOURS, SUPPORT_PHONE, TRUST_BADGES,
};
use super::html::{bullet_list, escape, link, section_heading};
use super::layout::{render_document, PageMeta, DEFAULT_KEYWORDS};
use super::structured_data;
use super::wizard_view;
use super::SiteContext;
use crate::coverage::{CoverageForm, WizardStep};

/// Every server-rendered page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    Cgm,
    Supplies,
    PumpsSensors,
    HowItWorks,
    ForClinics,
    Pricing,
    About,
    Compliance,
    PatientPortal,
    CheckCoverage,
}

impl Page {
    pub const ALL: [Page; 11] = [
        Self::Home,
        Self::Cgm,
        Self::Supplies,
        Self::PumpsSensors,
        Self::HowItWorks,
        Self::ForClinics,
        Self::Pricing,
        Self::About,
        Self::Compliance,
        Self::PatientPortal,
        Self::CheckCoverage,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Cgm => "/cgm",
            Page::Supplies => "/supplies",
            Page::PumpsSensors => "/pumps-sensors",
            Page::HowItWorks => "/how-it-works",
            Page::ForClinics => "/for-clinics",
            Page::Pricing => "/pricing",
            Page::About => "/about",
            Page::Compliance => "/compliance",
            Page::PatientPortal => "/patient-portal",
            Page::CheckCoverage => "/check-coverage",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Page::Home => "CGM & Diabetic Supplies Coverage | Medicare Part B & PPO Support",
            Page::Cgm => "Continuous Glucose Monitors (CGM) | CGM Care",
            Page::Supplies => "Diabetic Supplies | CGM Care",
            Page::PumpsSensors => "Insulin Pumps & Sensors | CGM Care",
            Page::HowItWorks => "How It Works | CGM Care",
            Page::ForClinics => "For Healthcare Providers | CGM Care",
            Page::Pricing => "Transparent Pricing | CGM Care",
            Page::About => "About CGM Care",
            Page::Compliance => "Compliance & Legal | CGM Care",
            Page::PatientPortal => "Patient Portal | CGM Care",
            Page::CheckCoverage => "Check Coverage | CGM Care",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Page::Home => "Get your CGM and diabetic supplies covered by your insurance. Medicare Part B and select PPOs supported. Check coverage in 60 seconds, no obligation.",
            Page::Cgm => "Most major CGM brands supported. We confirm eligibility, prior auth, and prescriptions with your clinician.",
            Page::Supplies => "Shoes, watches/monitors, strips, lancets - we help you get all your diabetic supplies covered by insurance.",
            Page::PumpsSensors => "Advanced diabetes management devices with comprehensive coordination support. We'll coordinate with your doctor to find the best solution for you.",
            Page::HowItWorks => "Get your supplies covered in three simple steps. We handle all the complex insurance work so you can focus on your health.",
            Page::ForClinics => "Same-day eligibility; e-fax RX; portal for status. Keep your staff focused on care. Let us handle benefits & paperwork.",
            Page::Pricing => "Clear, upfront pricing for all our CGM devices and diabetic supplies. HSA/FSA accepted. Payment plans available.",
            Page::About => "Trusted by 50k+ patients nationwide. We're committed to making diabetes management easier and more accessible.",
            Page::Compliance => "Your privacy and security are our top priorities. Learn about our compliance with HIPAA, TCPA, and other regulations.",
            Page::PatientPortal => "We're working hard to bring you a comprehensive patient portal experience.",
            Page::CheckCoverage => "Check your CGM and diabetic supply coverage in 60 seconds with no obligation.",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Self::ALL.into_iter().find(|page| page.path() == normalized)
    }

    pub fn meta(self) -> PageMeta<'static> {
        PageMeta {
            path: self.path(),
            title: self.title(),
            description: self.description(),
            keywords: DEFAULT_KEYWORDS,
        }
    }

    /// Full HTML document for the page.
    pub fn render(self, site: &SiteContext) -> String {
        if self == Page::CheckCoverage {
            return wizard_view::render_step(
                site,
                WizardStep::Insurance,
                &CoverageForm::default(),
                None,
            );
        }

        let body = match self {
            Page::Home => home_body(),
            Page::Cgm => cgm_body(),
            Page::Supplies => supplies_body(),
            Page::PumpsSensors => pumps_sensors_body(),
            Page::HowItWorks => how_it_works_body(),
            Page::ForClinics => for_clinics_body(),
            Page::Pricing => pricing_body(),
            Page::About => about_body(),
            Page::Compliance => compliance_body(),
            Page::PatientPortal => patient_portal_body(),
            Page::CheckCoverage => String::new(),
        };
        render_document(site, &self.meta(), &body, &self.page_schemas())
    }

    fn page_schemas(self) -> Vec<serde_json::Value> {
        match self {
            Page::Cgm | Page::Pricing => CGM_DEVICES.iter().map(structured_data::product).collect(),
            _ => Vec::new(),
        }
    }
}

pub fn render_not_found(site: &SiteContext, path: &str) -> String {
    let mut body = String::new();
    body.push_str("<section class=\"hero\"><h1 class=\"hero-title\">Page not found</h1>");
    let _ = write!(
        body,
        "<p>We couldn't find <code>{}</code>.</p>",
        escape(path)
    );
    link(&mut body, "/", "Back to home", "button primary");
    link(&mut body, "/check-coverage", "Check Coverage", "button");
    body.push_str("</section>");

    let meta = PageMeta {
        path,
        title: "Page Not Found | CGM Care",
        description: "The page you requested could not be found.",
        keywords: DEFAULT_KEYWORDS,
    };
    render_document(site, &meta, &body, &[])
}

fn hero(out: &mut String, heading: &str, lead: &str) {
    let _ = write!(
        out,
        "<section class=\"hero\"><h1 class=\"hero-title\">{}</h1><p class=\"lead\">{}</p>",
        escape(heading),
        escape(lead)
    );
}

fn call_to_action(out: &mut String, heading: &str, lead: &str, secondary: (&str, &str)) {
    out.push_str("<section class=\"cta\">");
    section_heading(out, None, heading);
    let _ = write!(out, "<p>{}</p>", escape(lead));
    link(out, "/check-coverage", "Check Coverage Now", "button primary");
    link(out, secondary.0, secondary.1, "button");
    out.push_str("</section>");
}

fn numbered_steps(out: &mut String) {
    out.push_str("<ol class=\"steps\">");
    for step in PROCESS_STEPS {
        let _ = write!(
            out,
            "<li><h3 class=\"step-title\">{}</h3><p>{}</p></li>",
            escape(step.title),
            escape(step.description)
        );
    }
    out.push_str("</ol>");
}

fn home_body() -> String {
    let mut out = String::new();
    hero(
        &mut out,
        "Get your CGM and diabetic supplies covered by your insurance",
        "Medicare Part B and select PPOs supported. Check coverage in 60 seconds, no obligation.",
    );
    link(&mut out, "/check-coverage", "Check Coverage Now", "button primary");
    link(&mut out, "/how-it-works", "Learn more", "button");
    out.push_str("</section>");

    out.push_str("<section class=\"trust\">");
    section_heading(&mut out, None, "Trusted by thousands of patients nationwide");
    out.push_str("<dl class=\"stats\">");
    for (figure, caption) in [
        ("50k+", "Patients served"),
        ("1 day", "Benefits verified"),
        ("HIPAA", "Compliant"),
    ] {
        let _ = write!(out, "<div><dt>{figure}</dt><dd>{caption}</dd></div>");
    }
    out.push_str("</dl></section>");

    out.push_str("<section class=\"process\">");
    section_heading(&mut out, None, "How it works");
    out.push_str("<p>Get your supplies covered in three simple steps</p>");
    numbered_steps(&mut out);
    out.push_str("</section>");

    call_to_action(
        &mut out,
        "Ready to get started?",
        "Check your coverage in 60 seconds and take the first step toward better diabetes management.",
        ("/for-clinics", "For Healthcare Providers"),
    );
    out
}

fn cgm_body() -> String {
    let mut out = String::new();
    hero(&mut out, "Continuous Glucose Monitors (CGM)", Page::Cgm.description());
    out.push_str("</section>");

    out.push_str("<section class=\"coverage-support\">");
    section_heading(&mut out, None, "Coverage & Support");
    out.push_str("<p>We handle all the complex insurance work so you can focus on your health</p>");
    for (title, text) in [
        ("Eligibility Verification", "We verify your insurance coverage and determine if you qualify for CGM under your plan."),
        ("Prior Authorization", "Our team handles all prior authorization paperwork with your insurance company."),
        ("Prescription Coordination", "We work directly with your healthcare provider to ensure proper prescriptions."),
    ] {
        let _ = write!(out, "<article><h3>{}</h3><p>{}</p></article>", escape(title), escape(text));
    }
    out.push_str("</section>");

    out.push_str("<section class=\"devices\">");
    section_heading(&mut out, None, "Supported CGM Devices");
    out.push_str(
        "<p>We work with all major CGM manufacturers to provide you with the best options</p><div class=\"grid\">",
    );
    for device in CGM_DEVICES {
        let _ = write!(
            out,
            "<article class=\"device\" id=\"{}\"><h3>{}</h3><p class=\"brand\">{}</p><p>{}</p>",
            escape(device.key),
            escape(device.name),
            escape(device.brand),
            escape(device.summary)
        );
        bullet_list(&mut out, device.features);
        out.push_str("</article>");
    }
    out.push_str("</div></section>");

    out.push_str("<section class=\"process\">");
    section_heading(&mut out, None, "How We Get You Your CGM");
    numbered_steps(&mut out);
    out.push_str("</section>");

    out.push_str("<section class=\"faq\">");
    section_heading(&mut out, Some("faq"), "Frequently Asked Questions");
    out.push_str("<dl>");
    for entry in FAQ {
        let _ = write!(
            out,
            "<dt class=\"faq-question\">{}</dt><dd>{}</dd>",
            escape(entry.question),
            escape(entry.answer)
        );
    }
    out.push_str("</dl></section>");

    call_to_action(
        &mut out,
        "Ready to get your CGM?",
        "Check your coverage in 60 seconds and take control of your diabetes management.",
        ("/pricing", "View Pricing"),
    );
    out
}

fn supplies_body() -> String {
    let mut out = String::new();
    hero(&mut out, "Diabetic Supplies", Page::Supplies.description());
    out.push_str("</section>");

    out.push_str("<section class=\"categories\">");
    section_heading(&mut out, None, "Supply Categories");
    for category in SUPPLY_CATEGORIES {
        let _ = write!(
            out,
            "<article id=\"{}\"><h3>{}</h3><p>{}</p>",
            escape(category.key),
            escape(category.name),
            escape(category.description)
        );
        bullet_list(&mut out, category.items);
        let _ = write!(
            out,
            "<p class=\"coverage-note\">{}</p>",
            escape(category.coverage_summary)
        );
        if category.coverage.prior_auth_required {
            out.push_str("<p class=\"badge\">Prior authorization required</p>");
        }
        out.push_str("</article>");
    }
    out.push_str("</section>");

    out.push_str("<section class=\"coverage-rules\">");
    section_heading(&mut out, None, "Insurance Coverage Rules");
    for plan in PLAN_COVERAGE_RULES {
        let _ = write!(out, "<article><h3>{}</h3>", escape(plan.plan));
        bullet_list(&mut out, plan.rules);
        out.push_str("</article>");
    }
    out.push_str("</section>");

    call_to_action(
        &mut out,
        "Get your supplies covered",
        "Check your coverage in 60 seconds and let us handle the paperwork.",
        ("/pricing", "View Cash Prices"),
    );
    out
}

fn pumps_sensors_body() -> String {
    let mut out = String::new();
    hero(&mut out, "Insulin Pumps & Sensors", Page::PumpsSensors.description());
    out.push_str("</section>");

    out.push_str("<section class=\"families\">");
    section_heading(&mut out, None, "Device Categories");
    for family in PUMP_AND_SENSOR_FAMILIES {
        let _ = write!(
            out,
            "<article><h3>{}</h3><p>{}</p>",
            escape(family.name),
            escape(family.description)
        );
        bullet_list(&mut out, family.features);
        let _ = write!(
            out,
            "<p class=\"brands\">Supported brands: {}</p></article>",
            escape(&family.brands.join(", "))
        );
    }
    out.push_str("</section>");

    out.push_str("<section class=\"coordination\">");
    section_heading(&mut out, None, "Doctor Coordination Process");
    out.push_str("<ol class=\"steps\">");
    for step in DOCTOR_COORDINATION_STEPS {
        let _ = write!(
            out,
            "<li><h3 class=\"step-title\">{}</h3><p>{}</p></li>",
            escape(step.title),
            escape(step.description)
        );
    }
    out.push_str("</ol></section>");

    out.push_str("<section class=\"benefits\">");
    section_heading(&mut out, None, "Benefits of Advanced Devices");
    for benefit in ADVANCED_DEVICE_BENEFITS {
        let _ = write!(
            out,
            "<article><h3>{}</h3><p>{}</p></article>",
            escape(benefit.title),
            escape(benefit.description)
        );
    }
    out.push_str("</section>");

    call_to_action(
        &mut out,
        "Ready to explore advanced options?",
        "Check your coverage and we'll coordinate with your doctor.",
        ("/about#contact", "Talk to an Advisor"),
    );
    out
}

fn how_it_works_body() -> String {
    let mut out = String::new();
    hero(&mut out, "How It Works", Page::HowItWorks.description());
    out.push_str("</section>");

    out.push_str("<section class=\"process\"><ol class=\"steps\">");
    for step in PROCESS_STEPS {
        let _ = write!(
            out,
            "<li><h3 class=\"step-title\">{}</h3><p>{}</p>",
            escape(step.title),
            escape(step.description)
        );
        bullet_list(&mut out, step.details);
        let _ = write!(out, "<p class=\"timeline\">{}</p></li>", escape(step.timeline));
    }
    out.push_str("</ol></section>");

    out.push_str("<section class=\"requirements\">");
    section_heading(&mut out, None, "What You'll Need");
    for group in REQUIRED_INFORMATION {
        let _ = write!(out, "<article><h3>{}</h3>", escape(group.category));
        bullet_list(&mut out, group.items);
        out.push_str("</article>");
    }
    out.push_str("</section>");

    out.push_str("<section class=\"timeline\">");
    section_heading(&mut out, None, "Typical Timeline");
    out.push_str("<ol>");
    for phase in FULFILMENT_TIMELINE {
        let _ = write!(
            out,
            "<li><h3>{}</h3><p class=\"duration\">{}</p><p>{}</p></li>",
            escape(phase.phase),
            escape(phase.duration),
            escape(phase.description)
        );
    }
    out.push_str("</ol></section>");

    call_to_action(
        &mut out,
        "Ready to get started?",
        "Check your coverage in 60 seconds.",
        ("/cgm#faq", "Read the FAQ"),
    );
    out
}

fn for_clinics_body() -> String {
    let mut out = String::new();
    hero(&mut out, "For Healthcare Providers", Page::ForClinics.description());
    link(&mut out, "/about#contact", "Request a Demo", "button primary");
    out.push_str("</section>");

    out.push_str("<section class=\"services\">");
    section_heading(&mut out, None, "Our Services for Providers");
    for service in CLINIC_SERVICES {
        let _ = write!(
            out,
            "<article><h3>{}</h3><p>{}</p></article>",
            escape(service.title),
            escape(service.description)
        );
    }
    out.push_str("</section>");

    out.push_str("<section class=\"benefits\">");
    section_heading(&mut out, None, "Why Partner With Us");
    bullet_list(&mut out, CLINIC_BENEFITS);
    out.push_str("</section>");

    out.push_str("<section class=\"referral-kit\">");
    section_heading(&mut out, None, "Referral Kit");
    out.push_str("<ul>");
    for resource in REFERRAL_KIT {
        let _ = write!(
            out,
            "<li><strong>{}</strong> <span class=\"format\">{}</span><p>{}</p></li>",
            escape(resource.name),
            escape(resource.format),
            escape(resource.description)
        );
    }
    out.push_str("</ul></section>");

    out.push_str("<section class=\"provider-portal\">");
    section_heading(&mut out, None, "Provider Portal");
    for module in PROVIDER_PORTAL_MODULES {
        let _ = write!(
            out,
            "<article><h3>{}</h3><p>{}</p>",
            escape(module.title),
            escape(module.description)
        );
        bullet_list(&mut out, module.features);
        out.push_str("</article>");
    }
    out.push_str("</section>");
    out
}

fn pricing_body() -> String {
    let mut out = String::new();
    hero(&mut out, "Transparent Pricing", Page::Pricing.description());
    out.push_str("</section>");

    out.push_str("<section class=\"device-pricing\">");
    section_heading(&mut out, Some("devices"), "CGM Device Pricing");
    out.push_str("<p>One-time device cost plus monthly sensor subscriptions</p><div class=\"grid\">");
    for device in CGM_DEVICES {
        let popular = if device.popular {
            "<span class=\"badge\">Most Popular</span>"
        } else {
            ""
        };
        let _ = write!(
            out,
            "<article class=\"device\">{}<h3>{}</h3><p>{}</p><p class=\"price\">{}</p><p class=\"monthly\">{}/month for sensors</p>",
            popular,
            escape(device.name),
            escape(device.description),
            format_usd(device.price_cents),
            format_usd(device.monthly_cents)
        );
        bullet_list(&mut out, device.features);
        out.push_str("</article>");
    }
    out.push_str("</div></section>");

    out.push_str("<section class=\"supply-pricing\">");
    section_heading(&mut out, Some("supplies"), "Diabetic Supplies Pricing");
    out.push_str("<p>Transparent pricing for all your diabetic supply needs</p>");
    for group in SUPPLY_PRICE_LIST {
        let _ = write!(out, "<table><caption>{}</caption><tbody>", escape(group.category));
        for item in group.items {
            let _ = write!(
                out,
                "<tr><th scope=\"row\">{}</th><td>{}</td><td>{}</td></tr>",
                escape(item.name),
                escape(item.price),
                escape(item.quantity)
            );
        }
        out.push_str("</tbody></table>");
    }
    out.push_str("</section>");

    out.push_str("<section class=\"payment-options\">");
    section_heading(&mut out, None, "Payment Options");
    for option in PAYMENT_OPTIONS {
        let _ = write!(
            out,
            "<article><h3>{}</h3><p>{}</p></article>",
            escape(option.title),
            escape(option.description)
        );
    }
    out.push_str("</section>");

    out.push_str("<section class=\"comparison\">");
    section_heading(&mut out, None, "Insurance vs. Cash Pay");
    out.push_str("<article><h3>Insurance Coverage</h3>");
    bullet_list(
        &mut out,
        &[
            "Lower out-of-pocket costs",
            "We handle all paperwork",
            "Prior authorization included",
            "Automatic reorders",
        ],
    );
    link(&mut out, "/check-coverage", "Check Your Coverage", "button primary");
    out.push_str("</article><article><h3>Cash Pay</h3>");
    bullet_list(
        &mut out,
        &[
            "No insurance paperwork",
            "Immediate availability",
            "HSA/FSA accepted",
            "Payment plans available",
        ],
    );
    link(&mut out, "/pricing#devices", "Start Shopping", "button");
    out.push_str("</article></section>");

    call_to_action(
        &mut out,
        "Ready to get started?",
        "Check your insurance coverage first, or start shopping with our transparent cash-pay options.",
        ("/about#contact", "Talk to an Advisor"),
    );
    out
}

fn about_body() -> String {
    let mut out = String::new();
    hero(&mut out, "About CGM Care", Page::About.description());
    out.push_str("</section>");

    out.push_str("<section class=\"accreditations\">");
    section_heading(&mut out, None, "Trusted & Accredited");
    for badge in TRUST_BADGES {
        let _ = write!(
            out,
            "<article><h3>{}</h3><p>{}</p></article>",
            escape(badge.title),
            escape(badge.description)
        );
    }
    out.push_str("</section>");

    out.push_str("<section class=\"mission\">");
    section_heading(&mut out, None, "Our Mission");
    out.push_str("<p>To make diabetes management easier and more accessible by handling the complex insurance work so you can focus on your health.</p></section>");

    out.push_str("<section class=\"states\">");
    section_heading(&mut out, None, "Nationwide Coverage");
    out.push_str("<p>We serve patients in all 50 states with local support and fast shipping.</p>");
    bullet_list(&mut out, STATES_SERVED);
    out.push_str("</section>");

    out.push_str("<section class=\"hours\">");
    section_heading(&mut out, None, "Support Hours");
    out.push_str("<dl>");
    for slot in SUPPORT_HOURS {
        let _ = write!(out, "<dt>{}</dt><dd>{}</dd>", escape(slot.days), escape(slot.hours));
    }
    out.push_str("</dl></section>");

    out.push_str("<section class=\"contact\">");
    section_heading(&mut out, Some("contact"), "Contact Us");
    out.push_str("<p>Get in touch with our support team for any questions or assistance.</p>");
    for channel in CONTACT_CHANNELS {
        let _ = write!(
            out,
            "<article><h3>{}</h3><p class=\"value\">{}</p><p>{}</p></article>",
            escape(channel.kind),
            escape(channel.value).replace('\n', "<br>"),
            escape(channel.description)
        );
    }
    out.push_str("</section>");

    call_to_action(
        &mut out,
        "Ready to get started?",
        "Join thousands of patients who trust CGM Care for their diabetes management needs.",
        ("/how-it-works", "Learn How It Works"),
    );
    out
}

fn compliance_body() -> String {
    let mut out = String::new();
    hero(&mut out, "Compliance & Legal", Page::Compliance.description());
    out.push_str("</section>");

    for section in COMPLIANCE_SECTIONS {
        out.push_str("<section class=\"policy\">");
        section_heading(&mut out, Some(section.id), section.title);
        let _ = write!(out, "<p>{}</p>", escape(section.overview));
        bullet_list(&mut out, section.key_points);
        let _ = write!(out, "<p class=\"policy-contact\">{}</p>", escape(section.contact));
        out.push_str("</section>");
    }

    out.push_str("<section class=\"documents\">");
    section_heading(&mut out, Some("terms"), "Legal Documents");
    out.push_str("<ul>");
    for document in LEGAL_DOCUMENTS {
        let _ = write!(
            out,
            "<li><strong>{}</strong><p>{}</p><p class=\"updated\">Last updated: {}</p></li>",
            escape(document.name),
            escape(document.description),
            escape(document.last_updated)
        );
    }
    out.push_str("</ul></section>");

    out.push_str("<section class=\"security\">");
    section_heading(&mut out, None, "Data Security");
    for measure in DATA_SECURITY_MEASURES {
        let _ = write!(
            out,
            "<article><h3>{}</h3><p>{}</p></article>",
            escape(measure.title),
            escape(measure.description)
        );
    }
    out.push_str("</section>");

    let _ = write!(
        out,
        "<section class=\"questions\"><h2>Questions?</h2><p>Contact our compliance team at {} or {}.</p></section>",
        escape(COMPLIANCE_EMAIL),
        escape(SUPPORT_PHONE)
    );
    out
}

fn patient_portal_body() -> String {
    let mut out = String::new();
    hero(&mut out, "Coming Soon", Page::PatientPortal.description());
    out.push_str("<p>Stay tuned for updates on when this feature will be available.</p></section>");

    out.push_str("<section class=\"preview\">");
    section_heading(&mut out, None, "What to Expect");
    for feature in PATIENT_PORTAL_PREVIEW {
        let _ = write!(
            out,
            "<article><h3>{}</h3><p>{}</p></article>",
            escape(feature.title),
            escape(feature.description)
        );
    }
    out.push_str("</section>");

    let _ = write!(
        out,
        "<section class=\"help\"><p>Need help now? Call {} or</p>",
        escape(SUPPORT_PHONE)
    );
    link(&mut out, "/check-coverage", "Check Your Coverage", "button primary");
    out.push_str("</section>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_through_lookup() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/pricing/"), Some(Page::Pricing));
        assert_eq!(Page::from_path("/admin"), None);
    }

    #[test]
    fn every_page_renders_its_title() {
        let site = SiteContext::default();
        for page in Page::ALL {
            let html = page.render(&site);
            assert!(
                html.contains(&format!("<title>{}</title>", escape(page.title()))),
                "{page:?} is missing its title"
            );
        }
    }

    #[test]
    fn pricing_lists_device_prices_and_product_schema() {
        let html = Page::Pricing.render(&SiteContext::default());
        assert!(html.contains("$299"));
        assert!(html.contains("$89/month for sensors"));
        assert!(html.contains("Most Popular"));
        assert!(html.contains("\"@type\":\"Product\""));
    }

    #[test]
    fn compliance_anchors_match_footer_links() {
        let html = Page::Compliance.render(&SiteContext::default());
        for anchor in ["hipaa", "tcpa", "privacy", "cookies", "accessibility", "terms"] {
            assert!(html.contains(&format!("id=\"{anchor}\"")), "missing #{anchor}");
        }
    }

    #[test]
    fn not_found_page_echoes_escaped_path() {
        let html = render_not_found(&SiteContext::default(), "/<script>");
        assert!(html.contains("Page not found"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
