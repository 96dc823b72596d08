//! Full-screen spinner.

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader">
            <div class="loader__spinner" aria-label="Loading"></div>
        </div>
    }
}
