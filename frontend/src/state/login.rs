use crate::{
    auth::{AuthFailure, AuthSuccess, Credentials},
    pages::login::repository::LoginRepository,
    validation::{self, Field, FormError},
};
use leptos::*;

pub const SUBMIT_LABEL: &str = "Log in";
pub const SUBMITTING_LABEL: &str = "Logging in...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Succeeded(AuthSuccess),
    Failed(AuthFailure),
}

/// A submission that passed validation and is waiting on the authenticator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub generation: u64,
    pub credentials: Credentials,
}

/// State of the login form between renders.
///
/// `Resolved` behaves like `Idle` for input purposes; the form never reaches
/// a terminal state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFormState {
    credentials: Credentials,
    status: SubmissionStatus,
    errors: Vec<FormError>,
    submitted: bool,
    touched: Vec<Field>,
    generation: u64,
    last_outcome: Option<LoginOutcome>,
}

impl LoginFormState {
    pub fn value(&self, field: Field) -> &str {
        self.credentials.value(field)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn controls_disabled(&self) -> bool {
        self.is_submitting()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn errors(&self) -> &[FormError] {
        &self.errors
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.errors.iter().find_map(|error| match error {
            FormError::Field { field: f, message } if *f == field => Some(message.as_str()),
            _ => None,
        })
    }

    pub fn form_error(&self) -> Option<&str> {
        self.errors.iter().find_map(|error| match error {
            FormError::Form { message } => Some(message.as_str()),
            _ => None,
        })
    }

    pub fn last_outcome(&self) -> Option<&LoginOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn can_request_sign_up(&self) -> bool {
        !self.is_submitting()
    }

    /// Records a keystroke. Once the form has been submitted, or the field
    /// has lost focus, the field is re-validated on every change.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        *self.credentials.value_mut(field) = value.into();
        if self.submitted || self.touched.contains(&field) {
            self.revalidate(field);
        }
    }

    pub fn blur(&mut self, field: Field) {
        if self.is_submitting() {
            return;
        }
        if !self.touched.contains(&field) {
            self.touched.push(field);
        }
        self.revalidate(field);
    }

    fn revalidate(&mut self, field: Field) {
        self.errors
            .retain(|error| !matches!(error, FormError::Field { field: f, .. } if *f == field));
        if let Err(message) = validation::validate_field(field, self.credentials.value(field)) {
            self.errors.push(FormError::field(field, message));
        }
    }

    /// Validates the whole form and, if it passes, enters `Submitting`.
    ///
    /// Returns `None` when a submission is already in flight or a field fails.
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        if self.is_submitting() {
            return None;
        }
        self.submitted = true;
        self.errors.clear();
        if let Err(errors) = validation::validate_credentials(&self.credentials) {
            self.errors = errors;
            return None;
        }

        self.generation += 1;
        self.status = SubmissionStatus::Submitting;
        self.last_outcome = None;
        Some(PendingSubmission {
            generation: self.generation,
            credentials: self.credentials.clone(),
        })
    }

    /// Applies the authenticator's answer for `generation`. Answers for any
    /// other generation are stale and leave the form untouched.
    pub fn resolve(
        &mut self,
        generation: u64,
        result: Result<AuthSuccess, AuthFailure>,
    ) -> Option<LoginOutcome> {
        if !self.is_submitting() || generation != self.generation {
            return None;
        }
        self.status = SubmissionStatus::Resolved;
        let outcome = match result {
            Ok(success) => LoginOutcome::Succeeded(success),
            Err(failure) => {
                self.errors.push(FormError::form(failure.to_string()));
                LoginOutcome::Failed(failure)
            }
        };
        self.last_outcome = Some(outcome.clone());
        Some(outcome)
    }

    /// Drops any in-flight submission, e.g. when the form is unmounted.
    pub fn abandon(&mut self) {
        if self.is_submitting() {
            self.generation += 1;
            self.status = SubmissionStatus::Idle;
        }
    }
}

/// Runs one submit cycle against `repo`.
///
/// Returns `None` when validation blocked the submit, another submit was in
/// flight, or the form was abandoned before the answer arrived.
pub async fn submit_login(
    form: RwSignal<LoginFormState>,
    repo: &LoginRepository,
) -> Option<LoginOutcome> {
    let pending = form.try_update(|state| state.begin_submit()).flatten()?;
    log::debug!(
        "login attempt: username={}",
        pending.credentials.username
    );

    let result = repo.authenticate(pending.credentials).await;
    let outcome = form
        .try_update(|state| state.resolve(pending.generation, result))
        .flatten();

    match &outcome {
        Some(LoginOutcome::Succeeded(success)) => {
            log::info!("login succeeded: username={}", success.username)
        }
        Some(LoginOutcome::Failed(failure)) => log::info!("login failed: {}", failure),
        None => log::debug!("login result discarded; form no longer waiting"),
    }
    outcome
}
