mod alert;
mod button;
mod password_field;

pub(crate) use alert::Alert;
pub(crate) use button::Button;
pub(crate) use password_field::PasswordField;
