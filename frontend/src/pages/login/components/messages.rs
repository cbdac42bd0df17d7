use leptos::*;

/// Message rendered directly under an input.
#[component]
pub fn FieldErrorMessage(
    #[prop(into)] message_id: String,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <p id=message_id.clone() class="text-sm font-medium text-destructive" role="alert">
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}

/// Form-level message shown next to the submit button.
#[component]
pub fn FormErrorMessage(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-destructive px-4 py-3 rounded text-sm" role="alert">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn field_error_renders_message() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some("Username is required.".to_string()));
            view! { <FieldErrorMessage message_id="username-error" error=error.into() /> }
        });
        assert!(html.contains("Username is required."));
        assert!(html.contains("username-error"));
    }

    #[test]
    fn form_error_hidden_without_message() {
        let html = render_to_string(move || {
            let error = create_rw_signal(None::<String>);
            view! { <FormErrorMessage error=error.into() /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
