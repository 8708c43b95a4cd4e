//! Labelled password input with its own show/hide toggle. The toggle is kept
//! out of the tab order so keyboard users move straight to the next field.

use crate::{
    app_lib::theme::{classes, Theme},
    components::icons::{EyeIcon, EyeSlashIcon},
    features::auth::Visibility,
};
use leptos::prelude::*;

#[component]
pub fn PasswordField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let visibility = RwSignal::new(Visibility::default());
    let input_class = classes(Theme::INPUT, Theme::INPUT_WITH_TOGGLE);

    view! {
        <div class="mb-6">
            <label class=Theme::LABEL for=id>
                {label}
            </label>
            <div class="relative">
                <input
                    id=id
                    name=id
                    type=move || visibility.get().input_type()
                    class=input_class
                    autocomplete=autocomplete.unwrap_or("new-password")
                    placeholder=placeholder
                    required
                    on:input=move |event| set_value.set(event_target_value(&event))
                />
                <button
                    type="button"
                    tabindex="-1"
                    class=Theme::TOGGLE
                    aria-label=move || visibility.get().toggle_label()
                    on:click=move |_| visibility.update(|state| *state = state.toggled())
                >
                    <Show when=move || visibility.get().is_shown() fallback=|| view! { <EyeIcon /> }>
                        <EyeSlashIcon />
                    </Show>
                </button>
            </div>
        </div>
    }
}
