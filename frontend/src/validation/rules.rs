//! Validation rules for the login credentials.

use super::{Field, FormError};
use crate::auth::Credentials;

pub const USERNAME_MIN_LEN: usize = 3;
pub const PASSWORD_MIN_LEN: usize = 6;

/// A predicate paired with the message reported when it fails.
#[derive(Clone, Copy)]
pub struct Rule {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish()
    }
}

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn has_min_len(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

fn username_long_enough(value: &str) -> bool {
    has_min_len(value, USERNAME_MIN_LEN)
}

fn password_long_enough(value: &str) -> bool {
    has_min_len(value, PASSWORD_MIN_LEN)
}

const USERNAME_RULES: &[Rule] = &[
    Rule {
        check: is_present,
        message: "Username is required.",
    },
    Rule {
        check: username_long_enough,
        message: "Username must be at least 3 characters.",
    },
];

const PASSWORD_RULES: &[Rule] = &[
    Rule {
        check: is_present,
        message: "Password is required.",
    },
    Rule {
        check: password_long_enough,
        message: "Password must be at least 6 characters.",
    },
];

/// Ordered rules for `field`. Order matters: the required check runs first.
pub fn rules_for(field: Field) -> &'static [Rule] {
    match field {
        Field::Username => USERNAME_RULES,
        Field::Password => PASSWORD_RULES,
    }
}

/// Validates a single value, returning the message of the first failing rule.
pub fn validate_field(field: Field, value: &str) -> Result<(), &'static str> {
    match rules_for(field).iter().find(|rule| !(rule.check)(value)) {
        Some(rule) => Err(rule.message),
        None => Ok(()),
    }
}

/// Validates both fields and collects one error per failing field.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), Vec<FormError>> {
    let errors: Vec<FormError> = Field::ALL
        .iter()
        .filter_map(|&field| {
            validate_field(field, credentials.value(field))
                .err()
                .map(|message| FormError::field(field, message))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
