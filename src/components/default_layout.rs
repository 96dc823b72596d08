//! Default layout: fleet navigation bar around dashboard pages.

#[cfg(test)]
#[path = "default_layout_test.rs"]
mod default_layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::TinOreStage;

/// Navigation entries as `(label, href)`.
pub(crate) fn nav_links() -> Vec<(&'static str, String)> {
    let mut links = vec![
        ("Dashboard", "/".to_owned()),
        ("Logsheet", "/logsheet".to_owned()),
        ("Transaction", "/transaction".to_owned()),
    ];
    links.extend(TinOreStage::ALL.iter().map(|stage| (stage.title(), format!("/tin-ore/{}", stage.slug()))));
    links.push(("Account", "/account".to_owned()));
    links
}

#[component]
pub fn DefaultLayout(children: Children) -> impl IntoView {
    let location = use_location();

    view! {
        <div class="default-layout">
            <header class="default-layout__header">
                <span class="default-layout__brand">"MOKAPRO"</span>
                <nav class="default-layout__nav">
                    {nav_links()
                        .into_iter()
                        .map(|(label, href)| {
                            let active_href = href.clone();
                            view! {
                                <a
                                    href=href
                                    class="default-layout__link"
                                    class:default-layout__link--active=move || location.pathname.get() == active_href
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <a href="/auth/logout" class="default-layout__logout">"Log out"</a>
            </header>
            <main class="default-layout__content">{children()}</main>
        </div>
    }
}
