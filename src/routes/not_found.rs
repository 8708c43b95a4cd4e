//! Minimal 404 card for unknown paths.

use crate::{app_lib::theme::Theme, components::icons::LockIcon, components::AuthCard};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AuthCard
            title="Page not found"
            subtitle="The page you requested does not exist."
            icon=|| view! { <LockIcon /> }
        >
            <p class="text-center text-sm">
                <A href="/" {..} class=Theme::LINK>
                    "Back to Sign In"
                </A>
            </p>
        </AuthCard>
    }
}
