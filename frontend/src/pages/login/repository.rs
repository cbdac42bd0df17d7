use crate::auth::{AuthFailure, AuthSuccess, Authenticator, Credentials, DemoAuthenticator};
use crate::config;
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    authenticator: Rc<dyn Authenticator>,
}

impl LoginRepository {
    pub fn new(authenticator: Rc<dyn Authenticator>) -> Self {
        Self { authenticator }
    }

    /// Demo authenticator with the delay taken from runtime config.
    pub fn from_config() -> Self {
        let delay = config::runtime_config().auth_delay();
        Self::new(Rc::new(DemoAuthenticator::default().with_delay(delay)))
    }

    pub async fn authenticate(&self, credentials: Credentials) -> Result<AuthSuccess, AuthFailure> {
        self.authenticator.authenticate(credentials).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use std::time::Duration;

    fn repository() -> LoginRepository {
        LoginRepository::new(Rc::new(
            DemoAuthenticator::default().with_delay(Duration::ZERO),
        ))
    }

    #[tokio::test]
    async fn authenticate_delegates_to_authenticator() {
        let repo = repository();
        let ok = repo
            .authenticate(Credentials::new("testuser", "password123"))
            .await
            .unwrap();
        assert_eq!(ok.username, "testuser");

        let err = repo
            .authenticate(Credentials::new("testuser", "nope-nope"))
            .await
            .expect_err("should reject");
        assert_eq!(err, AuthFailure::InvalidCredentials);
    }

    #[tokio::test(start_paused = true)]
    async fn from_config_uses_configured_delay() {
        let started = tokio::time::Instant::now();
        let _ = LoginRepository::from_config()
            .authenticate(Credentials::new("testuser", "password123"))
            .await;
        assert!(started.elapsed() >= config::runtime_config().auth_delay());
    }
}
