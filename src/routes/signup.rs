//! Signup route. Each password field carries a plain eye/eye-slash toggle; no
//! pointer tracking happens here. Submission applies the form's required-field
//! rules and hands the values to the `Submitter` seam.

use crate::{
    app_lib::{theme::Theme, AppError},
    components::{icons::UserPlusIcon, Alert, AuthCard, Button, EnterFrom, PasswordField},
    features::auth::{
        types::SignupFields, ConsoleSubmitter, SignupSubmission, Submitter,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;
use tracing::warn;

/// Renders the signup form.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (terms_accepted, set_terms_accepted) = signal(false);
    let (error, set_error) = signal::<Option<AppError>>(None);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let fields = SignupFields {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            terms_accepted: terms_accepted.get_untracked(),
        };
        let result = SignupSubmission::new(fields)
            .and_then(|submission| ConsoleSubmitter.submit_signup(&submission));

        if let Err(err) = result {
            warn!(%err, "signup submission rejected");
            set_error.set(Some(err));
        }
    };

    view! {
        <AuthCard
            title="Create Account"
            subtitle="Sign up to get started"
            icon=|| view! { <UserPlusIcon /> }
            enter_from=EnterFrom::Right
        >
            <form on:submit=on_submit>
                {move || error.get().map(|err| view! { <Alert message=err.to_string() /> })}
                <div class="mb-6">
                    <label class=Theme::LABEL for="fullname">
                        "Full Name"
                    </label>
                    <input
                        id="fullname"
                        name="fullname"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="name"
                        placeholder="Enter your full name"
                        required
                        on:input=move |event| set_full_name.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-6">
                    <label class=Theme::LABEL for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        class=Theme::INPUT
                        autocomplete="email"
                        inputmode="email"
                        placeholder="Enter your email"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-6">
                    <label class=Theme::LABEL for="username">
                        "Username"
                    </label>
                    <input
                        id="username"
                        name="username"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="username"
                        placeholder="Choose a username"
                        required
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <PasswordField
                    id="password"
                    label="Password"
                    placeholder="Create a password"
                    set_value=set_password
                />
                <PasswordField
                    id="confirmPassword"
                    label="Confirm Password"
                    placeholder="Confirm your password"
                    set_value=set_confirm_password
                />
                <div class="flex items-center mb-6">
                    <input
                        id="terms"
                        name="terms"
                        type="checkbox"
                        class=Theme::CHECKBOX
                        required
                        on:change=move |event| set_terms_accepted.set(event_target_checked(&event))
                    />
                    <label for="terms" class="ml-2 text-sm text-gray-600">
                        "I agree to the "
                        <a href="#" class="text-indigo-500 hover:underline">
                            "Terms & Conditions"
                        </a>
                    </label>
                </div>
                <Button button_type="submit">"Sign Up"</Button>
            </form>
            <p class="mt-8 text-center text-gray-500 text-sm">
                "Already have an account? "
                <A href="/" {..} class=Theme::LINK>
                    "Sign In"
                </A>
            </p>
        </AuthCard>
    }
}
