use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use super::domain::{CoverageForm, WizardStep};
use super::eligibility::{assess, EligibilityResult};
use super::form_input::WizardFormFields;
use super::service::{CoverageOutcome, CoverageService};
use super::submission::{FallbackStore, SubmissionReceipt, SubmissionSink};
use super::wizard::{CoverageWizard, StepValidationError, WizardAction};
use crate::content::wizard_view::{render_result, render_step};
use crate::content::SiteContext;
use crate::error::AppError;

/// Shared handler state: the coverage service plus the site settings used by the HTML views.
pub struct CoverageState<S, F> {
    pub service: Arc<CoverageService<S, F>>,
    pub site: Arc<SiteContext>,
}

impl<S, F> Clone for CoverageState<S, F> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            site: Arc::clone(&self.site),
        }
    }
}

/// JSON rendition of one wizard transition.
#[derive(Debug, Clone, Deserialize)]
pub struct WizardRequest {
    pub step: usize,
    #[serde(default)]
    pub action: WizardAction,
    /// Answers accumulated on earlier steps.
    #[serde(default)]
    pub form: CoverageForm,
    /// Answers entered on the active step.
    #[serde(default)]
    pub step_data: CoverageForm,
}

#[derive(Debug, Clone, Serialize)]
pub struct WizardResponse {
    pub step: usize,
    pub step_id: &'static str,
    pub title: &'static str,
    pub step_count: usize,
    pub progress_percent: u8,
    pub completed: bool,
    pub form: CoverageForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<CoverageOutcome>,
}

impl WizardResponse {
    fn from_wizard(wizard: CoverageWizard, outcome: Option<CoverageOutcome>) -> Self {
        let step = wizard.current_step();
        Self {
            step: step.index(),
            step_id: step.id(),
            title: step.title(),
            step_count: WizardStep::COUNT,
            progress_percent: step.progress_percent(),
            completed: outcome.is_some(),
            form: wizard.into_form(),
            outcome,
        }
    }
}

/// Router builder exposing the coverage wizard, the eligibility check, and the submission endpoint.
pub fn coverage_router<S, F>(service: Arc<CoverageService<S, F>>, site: Arc<SiteContext>) -> Router
where
    S: SubmissionSink + 'static,
    F: FallbackStore + 'static,
{
    Router::new()
        .route(
            "/check-coverage",
            get(wizard_page::<S, F>).post(wizard_form_handler::<S, F>),
        )
        .route("/api/submit-coverage", post(submit_coverage_handler::<S, F>))
        .route("/api/v1/coverage/wizard", post(wizard_api_handler::<S, F>))
        .route("/api/v1/coverage/eligibility", post(eligibility_handler))
        .with_state(CoverageState { service, site })
}

pub(crate) async fn wizard_page<S, F>(State(state): State<CoverageState<S, F>>) -> Html<String>
where
    S: SubmissionSink + 'static,
    F: FallbackStore + 'static,
{
    Html(render_step(
        &state.site,
        WizardStep::Insurance,
        &CoverageForm::default(),
        None,
    ))
}

pub(crate) async fn wizard_form_handler<S, F>(
    State(state): State<CoverageState<S, F>>,
    Form(fields): Form<WizardFormFields>,
) -> Response
where
    S: SubmissionSink + 'static,
    F: FallbackStore + 'static,
{
    let (step_index, action, answers) = fields.into_parts();
    let mut wizard = match CoverageWizard::resume(step_index, CoverageForm::default()) {
        Ok(wizard) => wizard,
        Err(err) => {
            let page = render_step(&state.site, WizardStep::Insurance, &answers, Some(&err));
            return (StatusCode::BAD_REQUEST, Html(page)).into_response();
        }
    };

    match state.service.step(&mut wizard, action, answers).await {
        Ok(Some(outcome)) => Html(render_result(&state.site, &outcome.eligibility)).into_response(),
        Ok(None) => Html(render_step(
            &state.site,
            wizard.current_step(),
            wizard.form(),
            None,
        ))
        .into_response(),
        Err(err) => {
            let page = render_step(&state.site, wizard.current_step(), wizard.form(), Some(&err));
            (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response()
        }
    }
}

pub(crate) async fn wizard_api_handler<S, F>(
    State(state): State<CoverageState<S, F>>,
    Json(request): Json<WizardRequest>,
) -> Response
where
    S: SubmissionSink + 'static,
    F: FallbackStore + 'static,
{
    let WizardRequest {
        step,
        action,
        form,
        step_data,
    } = request;

    let mut wizard = match CoverageWizard::resume(step, form) {
        Ok(wizard) => wizard,
        Err(err) => return AppError::from(err).into_response(),
    };

    match state.service.step(&mut wizard, action, step_data).await {
        Ok(outcome) => {
            (StatusCode::OK, Json(WizardResponse::from_wizard(wizard, outcome))).into_response()
        }
        Err(err @ StepValidationError::MissingFields { .. }) => {
            let current = wizard.current_step();
            let payload = json!({
                "error": err.to_string(),
                "step": current.index(),
                "step_id": current.id(),
                "missing_fields": err.missing_fields(),
                "form": wizard.form(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(err) => AppError::from(err).into_response(),
    }
}

pub(crate) async fn eligibility_handler(Json(form): Json<CoverageForm>) -> Json<EligibilityResult> {
    Json(assess(&form))
}

/// Echo endpoint: logs the body, waits out the processing delay, and returns it unchanged.
///
/// Unreadable bodies (including ones over the request body limit) get the same generic failure
/// as malformed JSON.
pub(crate) async fn submit_coverage_handler<S, F>(
    State(state): State<CoverageState<S, F>>,
    body: Result<Bytes, BytesRejection>,
) -> Response
where
    S: SubmissionSink + 'static,
    F: FallbackStore + 'static,
{
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            error!(error = %rejection, "coverage form submission body unreadable");
            return submission_failed();
        }
    };

    match state.service.receive(&body).await {
        Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
        Err(err) => {
            error!(error = %err, "error processing coverage form submission");
            submission_failed()
        }
    }
}

fn submission_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(SubmissionReceipt::failed()),
    )
        .into_response()
}
