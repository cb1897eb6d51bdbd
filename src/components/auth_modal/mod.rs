//! Sign in / sign up dialog.
//!
//! Opened from the landing page header and hero. Validation runs before
//! any request; service failures are shown inline under the form.

use aquacloud_core::{AuthError, Credentials, User};
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::auth;
use crate::utils::log;

stylance::import_crate_style!(css, "src/components/auth_modal/auth_modal.module.css");

/// Which form the dialog shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Welcome back",
            Self::SignUp => "Create your account",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }

    fn other(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

/// Dialog host; renders nothing while closed.
#[component]
pub fn AuthModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <Show when=move || ctx.auth_modal.get().is_some()>
            <AuthDialog />
        </Show>
    }
}

#[component]
fn AuthDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let mode = Signal::derive(move || ctx.auth_modal.get().unwrap_or_default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let finish = move |result: Result<User, AuthError>| {
        pending.set(false);
        match result {
            Ok(user) => ctx.signed_in(user),
            Err(e) => {
                log::warn(&format!("Authentication failed: {:?}", e));
                error.set(Some(e.to_string()));
            }
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        if let Err(e) = credentials.validate() {
            error.set(Some(e.to_string()));
            return;
        }

        error.set(None);
        pending.set(true);
        let sign_up = mode.get_untracked() == AuthMode::SignUp;
        spawn_local(async move {
            let result = if sign_up {
                auth::sign_up(&credentials).await
            } else {
                auth::sign_in(&credentials).await
            };
            finish(result);
        });
    };

    let on_google = move |_: MouseEvent| {
        if pending.get_untracked() {
            return;
        }
        error.set(None);
        pending.set(true);
        spawn_local(async move {
            finish(auth::sign_in_with_google().await);
        });
    };

    let switch_mode = move |_: MouseEvent| {
        error.set(None);
        ctx.open_auth(mode.get_untracked().other());
    };

    let close = move |_: MouseEvent| ctx.close_auth();

    view! {
        <div class=css::backdrop on:click=close>
            <div
                class=css::dialog
                role="dialog"
                aria-modal="true"
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                <button class=css::closeButton on:click=close aria-label="Close">
                    <Icon icon=ic::CLOSE />
                </button>

                <div class=css::brand>
                    <span class=css::brandIcon><Icon icon=ic::CLOUD /></span>
                    <span class=css::brandName>{APP_NAME}</span>
                </div>
                <h2 class=css::title>{move || mode.get().title()}</h2>

                <form class=css::form on:submit=on_submit>
                    <label class=css::label>
                        "Email"
                        <input
                            class=css::input
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=email
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class=css::label>
                        "Password"
                        <div class=css::passwordField>
                            <input
                                class=css::input
                                type=move || if show_password.get() { "text" } else { "password" }
                                autocomplete=move || match mode.get() {
                                    AuthMode::SignIn => "current-password",
                                    AuthMode::SignUp => "new-password",
                                }
                                placeholder="••••••••"
                                prop:value=password
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class=css::revealButton
                                on:click=move |_| show_password.update(|v| *v = !*v)
                                aria-label=move || {
                                    if show_password.get() { "Hide password" } else { "Show password" }
                                }
                            >
                                {move || {
                                    let icon = if show_password.get() { ic::EYE_OFF } else { ic::EYE };
                                    view! { <Icon icon=icon /> }
                                }}
                            </button>
                        </div>
                    </label>

                    {move || error.get().map(|msg| view! {
                        <p class=css::error role="alert">{msg}</p>
                    })}

                    <button class=css::submit type="submit" disabled=move || pending.get()>
                        {move || {
                            if pending.get() {
                                "Please wait...".to_string()
                            } else {
                                mode.get().submit_label().to_string()
                            }
                        }}
                    </button>
                </form>

                <div class=css::divider><span>"or"</span></div>

                <button class=css::googleButton on:click=on_google disabled=move || pending.get()>
                    <Icon icon=ic::GOOGLE />
                    "Continue with Google"
                </button>

                <p class=css::switchLine>
                    {move || match mode.get() {
                        AuthMode::SignIn => "Don't have an account?",
                        AuthMode::SignUp => "Already have an account?",
                    }}
                    " "
                    <button class=css::switchButton on:click=switch_mode>
                        {move || mode.get().other().submit_label()}
                    </button>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_switch() {
        assert_eq!(AuthMode::SignIn.other(), AuthMode::SignUp);
        assert_eq!(AuthMode::SignUp.other().submit_label(), "Sign In");
        assert_eq!(AuthMode::default(), AuthMode::SignIn);
    }
}
