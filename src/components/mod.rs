//! Shared UI components exported for routes.

pub(crate) mod icons;
pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use layout::{AuthCard, EnterFrom};
pub(crate) use ui::{Alert, Button, PasswordField};
