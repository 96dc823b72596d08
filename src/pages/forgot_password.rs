//! Static password-recovery instructions.

use leptos::prelude::*;

use crate::config::AppConfig;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let sign_in_path = expect_context::<AppConfig>().guard.sign_in_path;

    view! {
        <div class="sign-in-page">
            <div class="sign-in-card">
                <h1>"Forgot password"</h1>
                <p>
                    "Passwords are managed by your fleet administrator. "
                    "Contact them to reset your password, then sign in again."
                </p>
                <a class="sign-in-card__link" href=sign_in_path>
                    "Back to sign in"
                </a>
            </div>
        </div>
    }
}
