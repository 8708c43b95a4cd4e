//! Inline SVG icons. The tracking eye and binoculars read animated values from
//! signals; the rest are static glyphs.

mod binoculars;
mod tracking_eye;

pub(crate) use binoculars::Binoculars;
pub(crate) use tracking_eye::TrackingEye;

use crate::app_lib::theme::Theme;
use leptos::prelude::*;

/// Wide almond outline of the tracking eye.
pub(crate) const EYE_OUTLINE: &str = "M1.458 12C2.732 7.943 6.522 5 12 5c5.478 0 9.268 2.943 10.542 7-1.274 4.057-5.064 7-10.542 7-5.478 0-9.268-2.943-10.542-7z";

/// Fade timing for blink layers: close fast, reopen slower.
pub(crate) fn blink_transition(closing: bool) -> &'static str {
    if closing {
        "opacity 60ms"
    } else {
        "opacity 120ms"
    }
}

#[component]
pub fn EyeIcon() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="h-6 w-6"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            aria-hidden="true"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="1.7"
                d="M15 12a3 3 0 11-6 0 3 3 0 016 0z"
            ></path>
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="1.7"
                d="M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z"
            ></path>
        </svg>
    }
}

#[component]
pub fn EyeSlashIcon() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="h-6 w-6"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            aria-hidden="true"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="1.7"
                d="M13.875 18.825A10.05 10.05 0 0112 19c-4.478 0-8.268-2.943-9.542-7a9.949 9.949 0 014.362-5.095m0 0A9.962 9.962 0 0112 5c4.478 0 8.268 2.943 9.542 7a10.025 10.025 0 01-4.362 5.095m0 0l-3-3m3 3l3 3"
            ></path>
        </svg>
    }
}

#[component]
pub fn LockIcon() -> impl IntoView {
    view! {
        <svg
            class=Theme::HEADER_ICON
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                d="M16.5 7.5v-1A4.5 4.5 0 008 6.5v1m8.5 10.5h-9A2.5 2.5 0 015 15.5v-7A2.5 2.5 0 017.5 6h9A2.5 2.5 0 0119 8.5v7a2.5 2.5 0 01-2.5 2.5z"
            ></path>
        </svg>
    }
}

#[component]
pub fn UserPlusIcon() -> impl IntoView {
    view! {
        <svg
            class=Theme::HEADER_ICON
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                d="M18 7.5v3m0 0v3m0-3h3m-3 0h-3m-2.25-4.125a3.375 3.375 0 11-6.75 0 3.375 3.375 0 016.75 0zM3 19.235v-.11a6.375 6.375 0 0112.75 0v.109A12.318 12.318 0 019.374 21c-2.331 0-4.512-.645-6.374-1.766z"
            ></path>
        </svg>
    }
}
