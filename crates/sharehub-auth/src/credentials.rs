//! Login and registration form validation.
//!
//! Rules run before any request is sent. Fields are checked in form order
//! and the first violation is reported, so the message is stable.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use validator::{Validate, ValidationErrors};

use sharehub_core::error::AppError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
});

/// Body of `POST /api/v1/login`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginCredentials {
    /// Account email.
    #[validate(regex(path = *EMAIL_RE, message = "Invalid email address"))]
    pub email: String,
    /// Account password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl LoginCredentials {
    /// Create credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the form, returning the first violation as a validation error.
    pub fn check(&self) -> Result<(), AppError> {
        first_violation(
            self.validate(),
            &[
                ("email", &self.email, "Email is required"),
                ("password", &self.password, "Password is required"),
            ],
        )
    }
}

/// Body of `POST /api/v1/register`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct Registration {
    /// Display name.
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    /// Account email.
    #[validate(regex(path = *EMAIL_RE, message = "Invalid email address"))]
    pub email: String,
    /// Account password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl Registration {
    /// Create a registration.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the form, returning the first violation as a validation error.
    pub fn check(&self) -> Result<(), AppError> {
        first_violation(
            self.validate(),
            &[
                ("name", &self.name, "Name is required"),
                ("email", &self.email, "Email is required"),
                ("password", &self.password, "Password is required"),
            ],
        )
    }
}

/// Walk `fields` in order: an empty value reports its "required" message,
/// otherwise the first rule failure recorded for that field is reported.
fn first_violation(
    result: Result<(), ValidationErrors>,
    fields: &[(&str, &String, &str)],
) -> Result<(), AppError> {
    let errors = result.err();

    for (field, value, required) in fields {
        if value.is_empty() {
            return Err(AppError::validation(*required));
        }

        let Some(errors) = errors.as_ref() else {
            continue;
        };

        let message = errors
            .field_errors()
            .into_iter()
            .find(|(name, _)| *name == *field)
            .and_then(|(_, errs)| errs.first().cloned())
            .map(|err| {
                err.message
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {field}"))
            });

        if let Some(message) = message {
            return Err(AppError::validation(message));
        }
    }

    Ok(())
}
