//! Inline error banner for rejected submissions. Messages must be safe to
//! render and never include field values.

use leptos::prelude::*;

#[component]
pub fn Alert(message: String) -> impl IntoView {
    view! {
        <div
            class="mb-4 rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700"
            role="alert"
        >
            {message}
        </div>
    }
}
