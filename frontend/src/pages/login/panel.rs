use crate::{
    auth::AuthSuccess,
    pages::login::{components::form::LoginForm, view_model::use_login_view_model},
    validation::Field,
};
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    Callback, *,
};

#[component]
pub fn LoginPanel(
    #[prop(optional, into)] on_success: Option<Callback<AuthSuccess>>,
    #[prop(optional, into)] on_sign_up: Option<Callback<()>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let vm = use_login_view_model();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit(on_success);
    });
    let handle_input = Callback::new(move |(field, value): (Field, String)| vm.input(field, value));
    let handle_blur = Callback::new(move |field: Field| vm.blur(field));
    let handle_sign_up = Callback::new(move |_: MouseEvent| {
        vm.request_sign_up(on_sign_up);
    });

    view! {
        <LoginForm
            username=vm.value(Field::Username)
            password=vm.value(Field::Password)
            username_error=vm.field_error(Field::Username)
            password_error=vm.field_error(Field::Password)
            form_error=vm.form_error()
            disabled=vm.disabled()
            submit_label=vm.submit_label()
            on_input=handle_input
            on_blur=handle_blur
            on_submit=handle_submit
            on_sign_up=handle_sign_up
            class=class
        />
    }
}
