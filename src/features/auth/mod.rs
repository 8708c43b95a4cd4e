//! Login and signup form values, the required-field rules the browser also
//! enforces, and the seam where a real authentication service plugs in.
//! Password values must never be logged.

pub mod client;
pub mod types;
pub mod visibility;

pub use client::{ConsoleSubmitter, Submitter};
pub use types::{LoginSubmission, SignupSubmission};
pub use visibility::Visibility;
