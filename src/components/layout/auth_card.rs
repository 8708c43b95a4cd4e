//! Centered card on the animated gradient used by every auth route. It owns
//! the header glyph, title and build footer so routes only render their form.

use crate::app_lib::{
    build_info::git_commit_hash,
    theme::{classes, Theme},
};
use leptos::prelude::*;

/// Side of the viewport the card slides in from.
#[derive(Clone, Copy, Debug, Default)]
pub enum EnterFrom {
    #[default]
    Left,
    Right,
}

impl EnterFrom {
    fn class(self) -> &'static str {
        match self {
            EnterFrom::Left => "slide-in-left",
            EnterFrom::Right => "slide-in-right",
        }
    }
}

#[component]
pub fn AuthCard(
    title: &'static str,
    subtitle: &'static str,
    #[prop(into)] icon: ViewFn,
    #[prop(optional)] enter_from: EnterFrom,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=Theme::PAGE>
            <div class=classes(Theme::CARD, enter_from.class())>
                <div class="text-center mb-8">
                    {icon.run()}
                    <h2 class="text-xl sm:text-2xl font-bold text-gray-800">{title}</h2>
                    <p class="text-sm sm:text-base text-gray-500 mt-1">{subtitle}</p>
                </div>
                {children()}
                <p class="mt-6 text-center text-[10px] text-gray-300 select-none">
                    {format!("build {}", git_commit_hash())}
                </p>
            </div>
        </div>
    }
}
