//! Eye icon whose pupil follows the login fields and whose lid blinks.

use super::{blink_transition, EYE_OUTLINE};
use crate::features::eye::PupilPosition;
use leptos::prelude::*;

#[component]
pub fn TrackingEye(
    #[prop(into)] pupil: Signal<PupilPosition>,
    #[prop(into)] eyelid_opacity: Signal<f64>,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="h-6 w-6 block"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            aria-hidden="true"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="1.7"
                d=EYE_OUTLINE
            ></path>
            <circle
                cx=move || pupil.get().cx.to_string()
                cy=move || pupil.get().cy.to_string()
                r="3"
                stroke-width="1.7"
                stroke="currentColor"
                fill="currentColor"
                style="transition: cx 150ms ease-out, cy 120ms ease-out"
            ></circle>
            <ellipse
                cx="12"
                cy="12"
                rx="4.5"
                ry="2.8"
                fill="white"
                style=move || {
                    let opacity = eyelid_opacity.get();
                    format!(
                        "opacity: {opacity}; pointer-events: none; transition: {}",
                        blink_transition(opacity > 0.0),
                    )
                }
            ></ellipse>
        </svg>
    }
}
