use crate::{
    pages::login::components::messages::{FieldErrorMessage, FormErrorMessage},
    validation::Field,
};
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    *,
};

const INPUT_CLASS: &str = "flex h-10 w-full rounded-md border border-input bg-card px-3 py-2 text-sm text-card-foreground placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring disabled:cursor-not-allowed disabled:opacity-50";

#[component]
fn CredentialInput(
    field: Field,
    #[prop(into)] input_type: String,
    #[prop(into)] autocomplete: String,
    value: Signal<String>,
    error: Signal<Option<String>>,
    disabled: Signal<bool>,
    on_input: Callback<(Field, String)>,
    on_blur: Callback<Field>,
) -> impl IntoView {
    let error_id = format!("{}-error", field.name());
    let described_by = error_id.clone();

    view! {
        <div class="space-y-2">
            <label for=field.name() class="text-sm font-medium leading-none text-card-foreground">
                {field.label()}
            </label>
            <input
                id=field.name()
                name=field.name()
                type=input_type
                autocomplete=autocomplete
                placeholder=field.label()
                class=INPUT_CLASS
                aria-invalid=move || error.get().is_some().to_string()
                aria-describedby=move || error.get().map(|_| described_by.clone())
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.call((field, event_target_value(&ev)))
                on:blur=move |_| on_blur.call(field)
            />
            <FieldErrorMessage message_id=error_id error=error />
        </div>
    }
}

#[component]
pub fn LoginForm(
    username: Signal<String>,
    password: Signal<String>,
    username_error: Signal<Option<String>>,
    password_error: Signal<Option<String>>,
    form_error: Signal<Option<String>>,
    disabled: Signal<bool>,
    submit_label: Signal<&'static str>,
    on_input: Callback<(Field, String)>,
    on_blur: Callback<Field>,
    on_submit: Callback<SubmitEvent>,
    on_sign_up: Callback<MouseEvent>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <div class=format!(
            "flex flex-col bg-card text-card-foreground rounded-lg shadow-lg p-6 w-[320px] {}",
            class
        )>
            <h1 class="text-2xl font-bold text-center mb-6 text-card-foreground">"Log in"</h1>
            <form class="space-y-4" novalidate=true on:submit=move |ev| on_submit.call(ev)>
                <CredentialInput
                    field=Field::Username
                    input_type="text"
                    autocomplete="username"
                    value=username
                    error=username_error
                    disabled=disabled
                    on_input=on_input
                    on_blur=on_blur
                />
                <CredentialInput
                    field=Field::Password
                    input_type="password"
                    autocomplete="current-password"
                    value=password
                    error=password_error
                    disabled=disabled
                    on_input=on_input
                    on_blur=on_blur
                />

                <FormErrorMessage error=form_error />

                <button
                    type="submit"
                    class="inline-flex w-full items-center justify-center rounded-md bg-primary px-4 py-2 text-sm font-semibold text-primary-foreground hover:bg-primary/90 disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || disabled.get()
                    aria-busy=move || disabled.get().to_string()
                >
                    {move || submit_label.get()}
                </button>
            </form>
            <div class="mt-6 text-center">
                <button
                    type="button"
                    class="text-sm text-muted-foreground hover:text-primary underline-offset-4 hover:underline disabled:opacity-50"
                    disabled=move || disabled.get()
                    on:click=move |ev| on_sign_up.call(ev)
                >
                    "or, sign up"
                </button>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(disabled: bool, form_error: Option<&'static str>) -> String {
        render_to_string(move || {
            let text = |value: &str| Signal::derive({
                let value = value.to_string();
                move || value.clone()
            });
            view! {
                <LoginForm
                    username=text("testuser")
                    password=text("")
                    username_error=Signal::derive(|| None)
                    password_error=Signal::derive(|| Some("Password is required.".to_string()))
                    form_error=Signal::derive(move || form_error.map(str::to_string))
                    disabled=Signal::derive(move || disabled)
                    submit_label=Signal::derive(move || if disabled { "Logging in..." } else { "Log in" })
                    on_input=Callback::new(|_: (Field, String)| {})
                    on_blur=Callback::new(|_: Field| {})
                    on_submit=Callback::new(|_: SubmitEvent| {})
                    on_sign_up=Callback::new(|_: MouseEvent| {})
                />
            }
        })
    }

    #[test]
    fn renders_card_with_both_inputs_and_actions() {
        let html = render(false, None);
        assert!(html.contains("Log in"));
        assert!(html.contains("autocomplete=\"username\""));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("autocomplete=\"current-password\""));
        assert!(html.contains("or, sign up"));
        assert!(html.contains("Password is required."));
        assert!(!html.contains("Logging in..."));
    }

    #[test]
    fn submitting_state_disables_controls_and_swaps_label() {
        let idle = render(false, None);
        let html = render(true, None);
        assert!(html.contains("Logging in..."));
        // two inputs, the submit button and the sign-up button
        assert_eq!(
            html.matches("disabled").count() - idle.matches("disabled").count(),
            4
        );
    }

    #[test]
    fn form_level_error_is_rendered() {
        let html = render(false, Some("Invalid username or password. Please try again."));
        assert!(html.contains("Invalid username or password. Please try again."));
    }
}
