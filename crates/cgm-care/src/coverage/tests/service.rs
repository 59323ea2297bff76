use super::common::*;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::{json, Value};

use crate::coverage::domain::{CoverageForm, InsuranceType, WizardStep};
use crate::coverage::submission::{DeliveryOutcome, FallbackStore, FALLBACK_STORAGE_KEY};
use crate::coverage::wizard::{CoverageWizard, StepValidationError, WizardAction};
use crate::coverage::CoverageService;

fn contact_step_wizard() -> CoverageWizard {
    let mut earlier = complete_form();
    earlier.first_name = None;
    earlier.last_name = None;
    earlier.email = None;
    earlier.phone = None;
    earlier.hipaa_consent = None;
    earlier.tcpa_consent = None;
    earlier.benefits_check_consent = None;
    CoverageWizard::resume(WizardStep::Contact.index(), earlier).expect("contact step exists")
}

fn contact_answers() -> CoverageForm {
    let form = complete_form();
    CoverageForm {
        first_name: form.first_name,
        last_name: form.last_name,
        email: form.email,
        phone: form.phone,
        hipaa_consent: form.hipaa_consent,
        tcpa_consent: form.tcpa_consent,
        benefits_check_consent: form.benefits_check_consent,
        ..CoverageForm::default()
    }
}

#[tokio::test]
async fn next_moves_forward_without_completing() {
    let (service, sink, _) = build_service();
    let mut wizard = CoverageWizard::new();

    let outcome = service
        .step(
            &mut wizard,
            WizardAction::Next,
            CoverageForm {
                insurance_type: Some(InsuranceType::Ppo),
                ..CoverageForm::default()
            },
        )
        .await
        .expect("insurance step accepted");

    assert!(outcome.is_none());
    assert_eq!(wizard.current_step(), WizardStep::Medical);
    assert!(sink.delivered.lock().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_step_keeps_answers_and_position() {
    let (service, _, _) = build_service();
    let mut wizard = CoverageWizard::resume(3, CoverageForm::default()).expect("card step");

    let err = service
        .step(
            &mut wizard,
            WizardAction::Next,
            CoverageForm {
                insurance_card_front: Some("front.jpg".to_string()),
                ..CoverageForm::default()
            },
        )
        .await
        .expect_err("member id required");

    assert!(matches!(
        err,
        StepValidationError::MissingFields {
            step: WizardStep::Card,
            ..
        }
    ));
    assert_eq!(wizard.current_step(), WizardStep::Card);
    assert_eq!(
        wizard.form().insurance_card_front.as_deref(),
        Some("front.jpg")
    );
}

#[tokio::test]
async fn previous_keeps_current_answers() {
    let (service, _, _) = build_service();
    let mut wizard = CoverageWizard::resume(2, CoverageForm::default()).expect("doctor step");

    let outcome = service
        .step(
            &mut wizard,
            WizardAction::Previous,
            CoverageForm {
                doctor_city: Some("Boise".to_string()),
                ..CoverageForm::default()
            },
        )
        .await
        .expect("moving back never fails");

    assert!(outcome.is_none());
    assert_eq!(wizard.current_step(), WizardStep::Medical);
    assert_eq!(wizard.form().doctor_city.as_deref(), Some("Boise"));
}

#[tokio::test]
async fn last_step_delivers_the_whole_form() {
    let (service, sink, fallback) = build_service();
    let mut wizard = contact_step_wizard();

    let outcome = service
        .step(&mut wizard, WizardAction::Next, contact_answers())
        .await
        .expect("contact step accepted")
        .expect("wizard completed");

    assert!(outcome.eligibility.eligible);
    assert!(matches!(outcome.delivery, DeliveryOutcome::Delivered { .. }));

    let delivered = sink.delivered.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0]["insuranceType"], "medicare");
    assert_eq!(delivered[0]["firstName"], "Morgan");
    assert_eq!(fallback.get_item(FALLBACK_STORAGE_KEY).unwrap(), None);
}

#[tokio::test]
async fn transport_failure_parks_form_in_fallback_store() {
    let fallback = Arc::new(MemoryFallback::default());
    let service = service_with(Arc::new(OfflineSink), Arc::clone(&fallback));

    let outcome = service.complete(&complete_form()).await;

    assert!(outcome.eligibility.eligible);
    assert_eq!(
        outcome.delivery,
        DeliveryOutcome::StoredLocally {
            key: "coverageFormData"
        }
    );
    let stored = fallback
        .get_item(FALLBACK_STORAGE_KEY)
        .unwrap()
        .expect("form stored");
    let stored: Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(stored, serde_json::to_value(complete_form()).unwrap());
}

#[tokio::test]
async fn rejected_submission_is_not_stored_locally() {
    let fallback = Arc::new(MemoryFallback::default());
    let service = service_with(Arc::new(RejectingSink), Arc::clone(&fallback));

    let outcome = service.complete(&complete_form()).await;

    assert_eq!(
        outcome.delivery,
        DeliveryOutcome::Rejected {
            message: "Failed to submit form".to_string()
        }
    );
    assert_eq!(fallback.get_item(FALLBACK_STORAGE_KEY).unwrap(), None);
}

#[tokio::test]
async fn eligibility_is_reported_even_when_form_is_lost() {
    let service = service_with(Arc::new(OfflineSink), Arc::new(FullFallback));
    let mut form = complete_form();
    form.insurance_type = Some(InsuranceType::None);

    let outcome = service.complete(&form).await;

    assert!(!outcome.eligibility.eligible);
    assert_eq!(outcome.delivery.status_label(), "dropped");
}

#[tokio::test]
async fn receive_echoes_any_json_value() {
    let (service, _, _) = build_service();

    let receipt = service
        .receive(br#"{"anything":["goes",1,null]}"#)
        .await
        .expect("valid json");
    assert!(receipt.success);
    assert_eq!(receipt.data, Some(json!({ "anything": ["goes", 1, null] })));

    let receipt = service.receive(b"42").await.expect("scalars are json too");
    assert_eq!(receipt.data, Some(json!(42)));

    assert!(service.receive(b"{\"unterminated\":").await.is_err());
}

#[tokio::test]
async fn receive_waits_out_processing_delay() {
    let service = CoverageService::new(
        Arc::new(MemorySink::default()),
        Arc::new(MemoryFallback::default()),
        Duration::from_millis(25),
    );

    let started = Instant::now();
    service.receive(b"{}").await.expect("valid json");
    assert!(started.elapsed() >= Duration::from_millis(25));
    assert_eq!(service.processing_delay(), Duration::from_millis(25));
}
