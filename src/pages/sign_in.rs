//! Sign-in page: email + password against the authentication service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route `/auth/signin`. The guard sends unauthenticated visitors here
//! with the requested location in the `redirect` query parameter; on success
//! the page stores the login id and navigates to that location (or the
//! default view).

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use navigation::{SessionProvider, TaskGuard};

use crate::config::AppConfig;
use crate::net::types::Credentials;
use crate::state::session::{SessionState, browser_session};

pub(crate) const MISSING_INPUT: &str = "Enter your email and password.";
pub(crate) const AUTHENTICATING: &str = "Authenticating...";
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) const LOGIN_FAILED: &str = "An error occurred during login. Please try again.";
pub(crate) const WELCOME_BACK: &str = "Welcome back.";

pub(crate) fn validate_sign_in_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(MISSING_INPUT);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let session = expect_context::<SessionState>();
    let location = use_location();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let pending = StoredValue::new(None::<TaskGuard>);

    on_cleanup(move || {
        pending.try_with_value(|guard| {
            if let Some(guard) = guard {
                guard.cancel();
            }
        });
    });

    let navigate_home = navigate.clone();
    let default_path = config.guard.default_path.clone();
    Effect::new(move || {
        if browser_session().is_authenticated() {
            info.set(WELCOME_BACK.to_owned());
            session.observe(&browser_session());
            navigate_home(&default_path, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_sign_in_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(AUTHENTICATING.to_owned());

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let guard_config = config.guard.clone();
            let navigate = navigate.clone();
            let query = location.search.get_untracked();
            let (guard, request) = navigation::one_shot(async move {
                crate::net::api::authenticate(&config, &credentials).await
            });
            pending.set_value(Some(guard));
            leptos::task::spawn_local(async move {
                use crate::net::types::AuthOutcome;

                let Ok(result) = request.await else {
                    return;
                };
                match result {
                    Ok(AuthOutcome::Success { login_id }) => {
                        match session.complete_login(&browser_session(), &login_id) {
                            Ok(()) => {
                                let destination =
                                    navigation::redirect::post_login_destination(&guard_config, &query);
                                log::info!("sign-in: authenticated, continuing to {destination}");
                                navigate(&destination, NavigateOptions { replace: true, ..Default::default() });
                                return;
                            }
                            Err(e) => {
                                log::warn!("sign-in: {e}");
                                info.set(LOGIN_FAILED.to_owned());
                            }
                        }
                    }
                    Ok(AuthOutcome::Rejected { message }) => info.set(message),
                    Err(e) => {
                        log::warn!("sign-in: {e}");
                        info.set(LOGIN_FAILED.to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, &config, &navigate, &location, pending);
        }
    };

    let forgot_href = "/auth/forgot-password";

    view! {
        <div class="sign-in-page">
            <div class="sign-in-card">
                <h1>"MOKAPRO"</h1>
                <p class="sign-in-card__subtitle">"Sign in to your account"</p>
                <form class="sign-in-form" on:submit=on_submit>
                    <input
                        class="sign-in-input"
                        type="email"
                        placeholder="Email address"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="sign-in-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="sign-in-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <a class="sign-in-card__link" href=forgot_href>
                    "Forgot password?"
                </a>
                <Show when=move || !info.get().is_empty()>
                    <p class="sign-in-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
