use crate::{auth::AuthSuccess, components::layout::MainAppLayout, config};
use leptos::*;

pub mod components;
pub mod repository;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage() -> impl IntoView {
    let title = config::runtime_config().page_title();
    let on_success = Callback::new(|success: AuthSuccess| {
        log::info!("signed in as {}", success.username);
    });
    let on_sign_up = Callback::new(|_: ()| log::info!("sign-up requested from login page"));

    view! {
        <MainAppLayout title=title>
            <LoginPanel on_success=on_success on_sign_up=on_sign_up />
        </MainAppLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_page_renders_form_inside_centered_layout() {
        let html = render_to_string(|| view! { <LoginPage /> });
        assert!(html.contains("<main"));
        assert!(html.contains("items-center justify-center"));
        assert!(html.contains("Log in"));
        assert!(html.contains("or, sign up"));
    }
}
