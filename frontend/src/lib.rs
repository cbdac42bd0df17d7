use leptos::*;

pub mod auth;
mod components;
pub mod config;
mod pages;
pub mod state;
pub mod utils;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use components::layout::MainAppLayout;
pub use pages::login::{repository::LoginRepository, LoginPage, LoginPanel};

/// Installs the panic hook and console logger at the configured level.
pub fn init_logging(config: &config::RuntimeConfig) {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", err).into());
    }
}

pub fn run() {
    let config = config::init();
    init_logging(config);
    log::info!("starting login page");

    mount_to_body(|| view! { <LoginPage /> });
}
