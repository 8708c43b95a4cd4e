//! Shared Tailwind class constants so both auth cards stay visually consistent.

pub struct Theme;

impl Theme {
    /// Full-height page background behind the auth card.
    pub const PAGE: &'static str =
        "min-h-screen animated-gradient flex items-center justify-center px-4 py-6";

    /// The floating auth card.
    pub const CARD: &'static str = "w-full max-w-md bg-white/90 rounded-2xl sm:rounded-3xl p-6 sm:p-8 md:pt-12 md:px-10 md:pb-12 shadow-soft-card";

    pub const LABEL: &'static str = "block mb-2 text-sm sm:text-base text-gray-700 font-semibold";

    /// Text inputs; password inputs append `INPUT_WITH_TOGGLE` for the icon gutter.
    pub const INPUT: &'static str = "w-full px-3 sm:px-4 py-2.5 sm:py-3 text-sm sm:text-base rounded-lg border border-gray-300 focus:outline-none focus:border-indigo-500 transition";

    pub const INPUT_WITH_TOGGLE: &'static str = "pr-10 sm:pr-12";

    /// Icon button sitting inside the right edge of a password input.
    pub const TOGGLE: &'static str = "absolute right-2 sm:right-3 top-1/2 -translate-y-1/2 p-1 text-indigo-500 hover:text-indigo-700 transition cursor-pointer focus:outline-none";

    pub const CHECKBOX: &'static str = "accent-indigo-500";

    pub const LINK: &'static str = "text-indigo-500 font-semibold hover:underline";

    pub const SUBMIT: &'static str = "w-full py-2.5 sm:py-3 text-sm sm:text-base rounded-lg bg-indigo-500 hover:bg-indigo-600 text-white font-semibold shadow-soft-btn transition";

    /// Header glyph above the card title.
    pub const HEADER_ICON: &'static str = "mx-auto mb-3 sm:mb-4 h-12 w-12 sm:h-14 sm:w-14 text-indigo-500";
}

/// Joins two class lists with a single space.
pub fn classes(base: &str, extra: &str) -> String {
    match (base.is_empty(), extra.is_empty()) {
        (true, _) => extra.to_string(),
        (_, true) => base.to_string(),
        _ => format!("{base} {extra}"),
    }
}
