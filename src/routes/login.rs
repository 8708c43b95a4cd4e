//! Login route. The password toggle hosts the attentive icon: the pupil follows
//! the focused field and the eye (or binoculars, while the password is shown)
//! blinks on a timer owned by this page. Submission is handed to the
//! `Submitter` seam; nothing leaves the browser.

use crate::{
    app_lib::{
        theme::{classes, Theme},
        AppConfig, AppError,
    },
    components::{
        icons::{Binoculars, LockIcon, TrackingEye},
        Alert, AuthCard, Button, EnterFrom,
    },
    features::{
        auth::{ConsoleSubmitter, LoginSubmission, Submitter},
        eye::{gaze::field_len, scheduler::BrowserTimers, BlinkDriver, BlinkStep, EyeState},
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;
use rand::{rngs::StdRng, SeedableRng};
use tracing::warn;

/// Renders the login form and drives the icon's animation state.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = AppConfig::load();
    let eye = RwSignal::new(EyeState::new());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember_me, set_remember_me) = signal(false);
    let (error, set_error) = signal::<Option<AppError>>(None);

    let driver = BlinkDriver::start(
        BrowserTimers,
        config.blink_timing(),
        Box::new(StdRng::from_entropy()),
        Box::new(move |step| {
            eye.try_update(|state| match step {
                BlinkStep::Close => {
                    state.begin_blink();
                }
                BlinkStep::Open => {
                    state.end_blink();
                }
            })
            .is_some()
        }),
    );
    let driver = StoredValue::new_local(Some(driver));
    on_cleanup(move || {
        if let Some(Some(driver)) = driver.try_update_value(Option::take) {
            driver.stop();
        }
    });

    let pupil = Signal::derive(move || eye.with(EyeState::pupil));
    let eyelid_opacity = Signal::derive(move || eye.with(EyeState::eyelid_opacity));
    let lens_opacity = Signal::derive(move || eye.with(EyeState::lens_opacity));
    let visibility = Signal::derive(move || eye.with(EyeState::visibility));

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let result = LoginSubmission::new(
            &username.get_untracked(),
            password.get_untracked(),
            remember_me.get_untracked(),
        )
        .and_then(|submission| ConsoleSubmitter.submit_login(&submission));

        if let Err(err) = result {
            warn!(%err, "login submission rejected");
            set_error.set(Some(err));
        }
    };

    view! {
        <AuthCard
            title="Welcome Back"
            subtitle="Please login to your account"
            icon=|| view! { <LockIcon /> }
            enter_from=EnterFrom::Left
        >
            <form on:submit=on_submit>
                {move || error.get().map(|err| view! { <Alert message=err.to_string() /> })}
                <div class="mb-4 sm:mb-6">
                    <label class=Theme::LABEL for="username">
                        "Username"
                    </label>
                    <input
                        id="username"
                        name="username"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="username"
                        placeholder="Enter your username"
                        required
                        on:focus=move |_| eye.update(EyeState::focus_username)
                        on:blur=move |_| eye.update(EyeState::blur_username)
                        on:input=move |event| {
                            let value = event_target_value(&event);
                            let len = field_len(&value);
                            eye.update(|state| state.input_username(len));
                            set_username.set(value);
                        }
                    />
                </div>
                <div class="mb-2">
                    <label class=Theme::LABEL for="password">
                        "Password"
                    </label>
                    <div class="relative">
                        <input
                            id="password"
                            name="password"
                            type=move || visibility.get().input_type()
                            class=classes(Theme::INPUT, Theme::INPUT_WITH_TOGGLE)
                            autocomplete="current-password"
                            placeholder="Enter your password"
                            required
                            on:focus=move |_| eye.update(EyeState::focus_password)
                            on:blur=move |_| eye.update(EyeState::blur_password)
                            on:input=move |event| {
                                let value = event_target_value(&event);
                                let len = field_len(&value);
                                eye.update(|state| state.input_password(len));
                                set_password.set(value);
                            }
                        />
                        <button
                            type="button"
                            tabindex="-1"
                            class=Theme::TOGGLE
                            aria-label=move || visibility.get().toggle_label()
                            on:click=move |_| eye.update(EyeState::toggle_visibility)
                        >
                            <Show
                                when=move || visibility.get().is_shown()
                                fallback=move || {
                                    view! {
                                        <TrackingEye pupil=pupil eyelid_opacity=eyelid_opacity />
                                    }
                                }
                            >
                                <Binoculars lens_opacity=lens_opacity />
                            </Show>
                        </button>
                    </div>
                </div>
                <div class="flex flex-col sm:flex-row items-start sm:items-center justify-between mb-4 sm:mb-6 gap-2 sm:gap-0">
                    <div>
                        <input
                            id="remember"
                            name="remember"
                            type="checkbox"
                            class=Theme::CHECKBOX
                            on:change=move |event| set_remember_me.set(event_target_checked(&event))
                        />
                        <label for="remember" class="ml-2 text-xs sm:text-sm text-gray-600">
                            "Remember me"
                        </label>
                    </div>
                    <a href="#" class="text-xs sm:text-sm text-indigo-500 hover:underline">
                        "Forgot password?"
                    </a>
                </div>
                <Button button_type="submit">"Sign In"</Button>
            </form>
            <p class="mt-6 sm:mt-8 text-center text-gray-500 text-xs sm:text-sm">
                "Don't have an account? "
                <A href="/signup" {..} class=Theme::LINK>
                    "Sign Up"
                </A>
            </p>
        </AuthCard>
    }
}
