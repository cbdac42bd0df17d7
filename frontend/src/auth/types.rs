use crate::validation::Field;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Password => &self.password,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSuccess {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error("Invalid username or password. Please try again.")]
    InvalidCredentials,
    #[error("Authentication is currently unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_password() {
        let rendered = format!("{:?}", Credentials::new("testuser", "password123"));
        assert!(rendered.contains("testuser"));
        assert!(!rendered.contains("password123"));
    }

    #[test]
    fn invalid_credentials_message_matches_form_copy() {
        assert_eq!(
            AuthFailure::InvalidCredentials.to_string(),
            "Invalid username or password. Please try again."
        );
    }

    #[test]
    fn value_mut_targets_the_requested_field() {
        let mut credentials = Credentials::default();
        credentials.value_mut(Field::Password).push_str("secret");
        assert_eq!(credentials.value(Field::Password), "secret");
        assert!(credentials.value(Field::Username).is_empty());
    }
}
