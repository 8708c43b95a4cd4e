//! Values captured from the login and signup forms at submit time. Passwords
//! are wrapped in `SecretString` and skipped during serialization, so the
//! serialized form is safe to log.

use crate::app_lib::AppError;
use secrecy::SecretString;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginSubmission {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: SecretString,
    pub remember_me: bool,
}

impl LoginSubmission {
    /// Builds a submission, applying the same `required` rules as the form.
    ///
    /// # Errors
    /// Returns `AppError::Validation` naming the first empty required field.
    pub fn new(username: &str, password: String, remember_me: bool) -> Result<Self, AppError> {
        require("Username", username)?;
        require("Password", &password)?;

        Ok(Self {
            username: username.to_string(),
            password: SecretString::from(password),
            remember_me,
        })
    }
}

/// Raw signup form values before validation.
#[derive(Default)]
pub struct SignupFields {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

#[derive(Debug, Serialize)]
pub struct SignupSubmission {
    pub full_name: String,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: SecretString,
    #[serde(skip_serializing)]
    pub confirm_password: SecretString,
    pub terms_accepted: bool,
}

impl SignupSubmission {
    /// Builds a submission from the raw fields. Password confirmation is
    /// carried through unchecked; comparing the two is left to the service.
    ///
    /// # Errors
    /// Returns `AppError::Validation` for the first empty required field, a
    /// malformed email, or unaccepted terms.
    pub fn new(fields: SignupFields) -> Result<Self, AppError> {
        require("Full name", &fields.full_name)?;
        require("Email", &fields.email)?;
        if !looks_like_email(&fields.email) {
            return Err(AppError::Validation(
                "Email address looks invalid.".to_string(),
            ));
        }
        require("Username", &fields.username)?;
        require("Password", &fields.password)?;
        require("Confirm password", &fields.confirm_password)?;
        if !fields.terms_accepted {
            return Err(AppError::Validation(
                "Please accept the Terms & Conditions.".to_string(),
            ));
        }

        Ok(Self {
            full_name: fields.full_name,
            email: fields.email.trim().to_string(),
            username: fields.username,
            password: SecretString::from(fields.password),
            confirm_password: SecretString::from(fields.confirm_password),
            terms_accepted: fields.terms_accepted,
        })
    }
}

/// Mirrors the browser's `required` check: only a completely empty value fails.
fn require(label: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        Err(AppError::Validation(format!("{label} is required.")))
    } else {
        Ok(())
    }
}

/// Shape check matching `type="email"`: one `@` with text on both sides.
fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
