//! Authentication capability consumed by the login form.

mod demo;
pub mod types;

pub use demo::DemoAuthenticator;
pub use types::*;

use futures::future::LocalBoxFuture;

/// Checks a set of credentials.
///
/// Implementations run on the UI thread, so the returned future is not `Send`.
pub trait Authenticator {
    fn authenticate(&self, credentials: Credentials)
        -> LocalBoxFuture<'static, Result<AuthSuccess, AuthFailure>>;
}
