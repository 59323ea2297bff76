use crate::infra::{
    parse_diabetes, parse_insurance, parse_monitoring, EndpointSubmissionSink,
    InMemoryFallbackStore,
};
use cgm_care::content::{Page, SiteContext};
use cgm_care::coverage::{
    assess, CoverageForm, CoverageOutcome, CoverageService, CoverageWizard, DeliveryOutcome,
    DiabetesType, EligibilityResult, InsuranceType, MonitoringMethod, SubmissionEndpoint,
    WizardAction,
};
use cgm_care::error::AppError;
use chrono::Local;
use clap::Args;
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Debug)]
pub(crate) struct EligibilityArgs {
    /// Insurance on file: medicare, ppo, or none
    #[arg(long, value_parser = parse_insurance)]
    pub(crate) insurance: InsuranceType,
    /// Diagnosis: type1, type2, gestational, or other
    #[arg(long, value_parser = parse_diabetes)]
    pub(crate) diabetes: DiabetesType,
    /// Current monitoring: fingersticks, cgm, both, or none
    #[arg(long, value_parser = parse_monitoring)]
    pub(crate) monitoring: Option<MonitoringMethod>,
    /// The patient currently uses insulin
    #[arg(long)]
    pub(crate) insulin: bool,
    /// The patient has a prescribing doctor
    #[arg(long)]
    pub(crate) has_doctor: bool,
}

impl EligibilityArgs {
    fn to_form(&self) -> CoverageForm {
        CoverageForm {
            insurance_type: Some(self.insurance),
            diabetes_type: Some(self.diabetes),
            current_monitoring: self.monitoring,
            insulin_use: Some(self.insulin),
            has_doctor: Some(self.has_doctor),
            ..CoverageForm::default()
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Site path to render, for example `/pricing`
    pub(crate) path: String,
    /// Base URL used for canonical links and structured data
    #[arg(long)]
    pub(crate) site_url: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Walk an uninsured patient instead of a Medicare patient
    #[arg(long)]
    pub(crate) uninsured: bool,
    /// Print the JSON payload handed to the submission endpoint
    #[arg(long)]
    pub(crate) show_payload: bool,
}

pub(crate) fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    let result = assess(&args.to_form());
    print_eligibility(&result);
    Ok(())
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let page = Page::from_path(&args.path).ok_or_else(|| AppError::UnknownPage(args.path.clone()))?;
    let site = args
        .site_url
        .map(SiteContext::new)
        .unwrap_or_default();
    println!("{}", page.render(&site));
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let sink = Arc::new(EndpointSubmissionSink::new(SubmissionEndpoint::new(
        Duration::ZERO,
    )));
    let service = CoverageService::new(
        Arc::clone(&sink),
        Arc::new(InMemoryFallbackStore::default()),
        Duration::ZERO,
    );
    let mut wizard = CoverageWizard::new();

    println!(
        "Coverage wizard demo ({})",
        Local::now().format("%Y-%m-%d %H:%M")
    );

    let mut outcome = None;
    for step_data in sample_patient(args.uninsured) {
        let step = wizard.current_step();
        println!(
            "- {} ({}% complete)",
            step.title(),
            wizard.progress_percent()
        );
        outcome = service
            .step(&mut wizard, WizardAction::Next, step_data)
            .await?;
    }

    let Some(CoverageOutcome {
        eligibility,
        delivery,
    }) = outcome
    else {
        println!("  Wizard did not reach the final step");
        return Ok(());
    };

    println!();
    print_eligibility(&eligibility);

    match &delivery {
        DeliveryOutcome::Delivered { receipt } => {
            println!(
                "\nSubmission: {} ({} forms delivered this run)",
                receipt.message,
                sink.delivered()
            );
            if args.show_payload {
                match serde_json::to_string_pretty(&receipt.data) {
                    Ok(json) => println!("{json}"),
                    Err(err) => println!("  Payload unavailable: {err}"),
                }
            }
        }
        other => println!("\nSubmission: {}", other.status_label()),
    }

    Ok(())
}

fn print_eligibility(result: &EligibilityResult) {
    println!("{}", result.headline());
    if let Some(detail) = &result.reason_detail {
        println!("  {detail}");
    }
    if let Some(timeline) = &result.estimated_timeline {
        println!("  Timeline: {timeline}");
    }
    if !result.next_steps.is_empty() {
        println!("Next steps:");
        for step in &result.next_steps {
            println!("  - {step}");
        }
    }
    if !result.required_documents.is_empty() {
        println!("Have ready:");
        for document in &result.required_documents {
            println!("  - {document}");
        }
    }
    if !result.cash_pay_options.is_empty() {
        println!("Cash-pay options:");
        for option in &result.cash_pay_options {
            let marker = if option.popular { " (most popular)" } else { "" };
            println!(
                "  - {}: {} then {}/month{marker}",
                option.name, option.price, option.monthly
            );
        }
    }
}

/// One answer set per wizard step, in order.
fn sample_patient(uninsured: bool) -> Vec<CoverageForm> {
    let insurance = if uninsured {
        InsuranceType::None
    } else {
        InsuranceType::Medicare
    };

    vec![
        CoverageForm {
            insurance_type: Some(insurance),
            ..CoverageForm::default()
        },
        CoverageForm {
            diabetes_type: Some(DiabetesType::Type2),
            current_monitoring: Some(MonitoringMethod::Fingersticks),
            insulin_use: Some(true),
            hypoglycemic_events: Some(false),
            ..CoverageForm::default()
        },
        CoverageForm {
            has_doctor: Some(true),
            doctor_name: Some("Dr. Rivera".to_string()),
            doctor_city: Some("Tucson".to_string()),
            ..CoverageForm::default()
        },
        CoverageForm {
            member_id: (!uninsured).then(|| "1EG4-TE5-MK72".to_string()),
            ..CoverageForm::default()
        },
        CoverageForm {
            first_name: Some("Sam".to_string()),
            last_name: Some("Ortiz".to_string()),
            email: Some("sam.ortiz@example.com".to_string()),
            phone: Some("5205550142".to_string()),
            hipaa_consent: Some(true),
            tcpa_consent: Some(true),
            benefits_check_consent: Some(true),
            ..CoverageForm::default()
        },
    ]
}
