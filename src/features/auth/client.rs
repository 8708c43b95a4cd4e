//! Submission seam for the auth forms. A real deployment swaps
//! `ConsoleSubmitter` for a transport that talks to an authentication or
//! registration service; the views only depend on `Submitter`.

use super::types::{LoginSubmission, SignupSubmission};
use crate::app_lib::AppError;
use serde::Serialize;
use tracing::{debug, info};

pub trait Submitter {
    /// # Errors
    /// Implementations return `AppError::Submission` when the hand-off fails.
    fn submit_login(&self, submission: &LoginSubmission) -> Result<(), AppError>;

    /// # Errors
    /// Implementations return `AppError::Submission` when the hand-off fails.
    fn submit_signup(&self, submission: &SignupSubmission) -> Result<(), AppError>;
}

/// Records a diagnostic event per submission and does nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSubmitter;

impl Submitter for ConsoleSubmitter {
    fn submit_login(&self, submission: &LoginSubmission) -> Result<(), AppError> {
        let payload = encode(submission)?;
        info!(username = %submission.username, "Form submitted");
        debug!(%payload, "login payload");
        Ok(())
    }

    fn submit_signup(&self, submission: &SignupSubmission) -> Result<(), AppError> {
        let payload = encode(submission)?;
        info!(username = %submission.username, "Sign up form submitted");
        debug!(%payload, "signup payload");
        Ok(())
    }
}

/// Serializes a submission for diagnostics. Secret fields are skipped by the types.
fn encode<T: Serialize>(submission: &T) -> Result<String, AppError> {
    serde_json::to_string(submission)
        .map_err(|err| AppError::Serialization(format!("Failed to encode submission: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::types::SignupFields;

    #[test]
    fn console_submitter_accepts_login() {
        let submission =
            LoginSubmission::new("ada", "hunter2".to_string(), true).expect("valid submission");
        assert!(ConsoleSubmitter.submit_login(&submission).is_ok());
    }

    #[test]
    fn console_submitter_accepts_signup() {
        let submission = SignupSubmission::new(SignupFields {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            username: "ada".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
            terms_accepted: true,
        })
        .expect("valid submission");
        assert!(ConsoleSubmitter.submit_signup(&submission).is_ok());
    }

    #[test]
    fn encoded_login_omits_secret() {
        let submission =
            LoginSubmission::new("ada", "hunter2".to_string(), false).expect("valid submission");
        let payload = encode(&submission).expect("encodes");
        assert_eq!(payload, r#"{"username":"ada","remember_me":false}"#);
    }
}
