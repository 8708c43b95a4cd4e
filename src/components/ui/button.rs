use crate::app_lib::theme::Theme;
use leptos::prelude::*;

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");

    view! {
        <button type=button_type class=Theme::SUBMIT>
            {children()}
        </button>
    }
}
