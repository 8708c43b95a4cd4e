/// Whether a password field renders its characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }

    #[must_use]
    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }

    /// Value for the `type` attribute of the guarded input.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Hidden => "password",
            Self::Shown => "text",
        }
    }

    /// Accessible label for the toggle button in this state.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Hidden => "Show password",
            Self::Shown => "Hide password",
        }
    }
}
