use super::{AuthFailure, AuthSuccess, Authenticator, Credentials};
use crate::utils::time;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use std::time::Duration;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);
const DEMO_USERNAME: &str = "testuser";
const DEMO_PASSWORD: &str = "password123";

/// Stand-in authenticator: waits a fixed delay, then accepts exactly one
/// credential pair. Not a security mechanism.
#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    accepted: Credentials,
    delay: Duration,
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self {
            accepted: Credentials::new(DEMO_USERNAME, DEMO_PASSWORD),
            delay: DEFAULT_DELAY,
        }
    }
}

impl DemoAuthenticator {
    pub fn new(accepted: Credentials, delay: Duration) -> Self {
        Self { accepted, delay }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Authenticator for DemoAuthenticator {
    fn authenticate(
        &self,
        credentials: Credentials,
    ) -> LocalBoxFuture<'static, Result<AuthSuccess, AuthFailure>> {
        let accepted = self.accepted.clone();
        let delay = self.delay;
        async move {
            time::sleep(delay).await;
            if credentials == accepted {
                Ok(AuthSuccess {
                    username: credentials.username,
                })
            } else {
                Err(AuthFailure::InvalidCredentials)
            }
        }
        .boxed_local()
    }
}
