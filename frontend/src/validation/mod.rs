//! Client-side validation for the login form.
//!
//! Rules are declared per field and evaluated in order; the first failing
//! rule supplies the message shown under the field.

pub mod rules;

pub use rules::{rules_for, validate_credentials, validate_field, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Username, Field::Password];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Password => "Password",
        }
    }
}

/// An error attached either to a single input or to the form as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    Field { field: Field, message: String },
    Form { message: String },
}

impl FormError {
    pub fn field(field: Field, message: impl Into<String>) -> Self {
        FormError::Field {
            field,
            message: message.into(),
        }
    }

    pub fn form(message: impl Into<String>) -> Self {
        FormError::Form {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FormError::Field { message, .. } | FormError::Form { message } => message,
        }
    }
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_match_input_names() {
        assert_eq!(Field::Username.name(), "username");
        assert_eq!(Field::Password.name(), "password");
        assert_eq!(Field::Password.label(), "Password");
    }

    #[test]
    fn form_error_exposes_message_for_both_variants() {
        let field = FormError::field(Field::Username, "bad");
        let form = FormError::form("worse");
        assert_eq!(field.message(), "bad");
        assert_eq!(form.to_string(), "worse");
    }
}
