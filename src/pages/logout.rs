//! Logout page: clear the session and reload at the sign-in view.

use leptos::prelude::*;
use navigation::SessionProvider;

use crate::config::AppConfig;
use crate::state::session::{SessionState, browser_session};
use crate::util::location::hard_redirect;

#[component]
pub fn LogOutPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let session = expect_context::<SessionState>();
    let sign_in_path = config.guard.sign_in_path;

    Effect::new(move || {
        let provider = browser_session();
        let cleared = if session.phase.get_untracked().is_authenticated() {
            session.complete_logout(&provider)
        } else {
            provider.logout()
        };
        if let Err(e) = cleared {
            log::warn!("logout: {e}");
        }
        hard_redirect(&sign_in_path);
    });

    view! {
        <div class="logout-page">
            <p>"Logging out"</p>
        </div>
    }
}
