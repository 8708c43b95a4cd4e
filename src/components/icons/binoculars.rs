//! Binoculars shown while the password is visible. Both lens glasses and their
//! glints dim together during a blink.

use super::blink_transition;
use leptos::prelude::*;

/// Peak opacity of the lens glass.
const GLASS_OPACITY: f64 = 0.35;
/// Peak opacity of the lens glint.
const GLINT_OPACITY: f64 = 0.9;

#[component]
pub fn Binoculars(#[prop(into)] lens_opacity: Signal<f64>) -> impl IntoView {
    let layer_style = move || blink_transition(lens_opacity.get() < 1.0).to_string();
    let glass = move || (lens_opacity.get() * GLASS_OPACITY).to_string();
    let glint = move || (lens_opacity.get() * GLINT_OPACITY).to_string();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="h-6 w-6 sm:h-8 sm:w-8"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            aria-hidden="true"
        >
            <circle cx="8" cy="12" r="4" stroke-width="1.7" fill="currentColor" opacity="0.1"></circle>
            <circle cx="8" cy="12" r="4" stroke-width="1.7" fill="none"></circle>
            <circle cx="16" cy="12" r="4" stroke-width="1.7" fill="currentColor" opacity="0.1"></circle>
            <circle cx="16" cy="12" r="4" stroke-width="1.7" fill="none"></circle>
            <line x1="10" y1="10" x2="14" y2="10" stroke-width="1.7" stroke-linecap="round"></line>
            <circle
                cx="8"
                cy="12"
                r="2.5"
                fill="currentColor"
                opacity=glass
                style=move || format!("transition: {}", layer_style())
            ></circle>
            <circle
                cx="16"
                cy="12"
                r="2.5"
                fill="currentColor"
                opacity=glass
                style=move || format!("transition: {}", layer_style())
            ></circle>
            <circle
                cx="7.2"
                cy="11"
                r="1"
                fill="white"
                opacity=glint
                style=move || format!("transition: {}", layer_style())
            ></circle>
            <circle
                cx="15.2"
                cy="11"
                r="1"
                fill="white"
                opacity=glint
                style=move || format!("transition: {}", layer_style())
            ></circle>
        </svg>
    }
}
