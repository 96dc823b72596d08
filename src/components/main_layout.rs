//! Main layout for ship pages: back button and page title.

use leptos::prelude::*;

fn go_back() {
    #[cfg(feature = "csr")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}

#[component]
pub fn MainLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <header class="main-layout__header">
            <button type="button" class="main-layout__back" on:click=move |_| go_back()>
                "‹ Back"
            </button>
            <h1 class="main-layout__title">{title}</h1>
        </header>
        <div class="main-layout__content">{children()}</div>
    }
}
