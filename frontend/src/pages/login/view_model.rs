use super::repository::LoginRepository;
use crate::auth::AuthSuccess;
use crate::state::login::{self, LoginFormState, LoginOutcome};
use crate::validation::Field;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: RwSignal<LoginFormState>,
    repository: StoredValue<LoginRepository>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let repository =
        use_context::<LoginRepository>().unwrap_or_else(LoginRepository::from_config);
    let form = create_rw_signal(LoginFormState::default());

    on_cleanup(move || {
        let _ = form.try_update(|state| state.abandon());
    });

    LoginViewModel {
        form,
        repository: store_value(repository),
    }
}

impl LoginViewModel {
    pub fn disabled(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|state| state.controls_disabled()))
    }

    pub fn value(&self, field: Field) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|state| state.value(field).to_string()))
    }

    pub fn field_error(&self, field: Field) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|state| state.field_error(field).map(str::to_string)))
    }

    pub fn form_error(&self) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|state| state.form_error().map(str::to_string)))
    }

    pub fn submit_label(&self) -> Signal<&'static str> {
        let form = self.form;
        Signal::derive(move || form.with(|state| state.submit_label()))
    }

    pub fn input(&self, field: Field, value: String) {
        self.form.update(|state| state.input(field, value));
    }

    pub fn blur(&self, field: Field) {
        self.form.update(|state| state.blur(field));
    }

    /// Starts a submission in the background; `on_success` fires once the
    /// authenticator accepts the credentials.
    pub fn submit(&self, on_success: Option<Callback<AuthSuccess>>) {
        if self.form.with_untracked(|state| state.is_submitting()) {
            return;
        }
        let form = self.form;
        let repository = self.repository.get_value();
        spawn_local(async move {
            if let Some(LoginOutcome::Succeeded(success)) =
                login::submit_login(form, &repository).await
            {
                if let Some(callback) = on_success {
                    callback.call(success);
                }
            }
        });
    }

    /// Forwards the sign-up intent unless a submission is in flight.
    pub fn request_sign_up(&self, on_sign_up: Option<Callback<()>>) -> bool {
        if !self.form.with_untracked(|state| state.can_request_sign_up()) {
            return false;
        }
        log::debug!("sign-up requested");
        if let Some(callback) = on_sign_up {
            callback.call(());
        }
        true
    }
}
