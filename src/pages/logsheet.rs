//! Logsheet: one card per ship; opening a card goes to the ship page.

#[cfg(test)]
#[path = "logsheet_test.rs"]
mod logsheet_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use navigation::redirect::encode_component;

use crate::components::loader::Loader;
use crate::config::AppConfig;
use crate::net::api::fetch_ships;
use crate::net::types::ShipEnvelope;

/// Path of the ship detail page for `id`.
pub(crate) fn ship_path(id: &str) -> String {
    format!("/ship/{}", encode_component(id))
}

#[component]
pub fn LogsheetPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let ships = LocalResource::new(move || {
        let config = config.clone();
        async move { fetch_ships(&config).await }
    });

    view! {
        <section class="logsheet">
            {move || match ships.get() {
                None => view! { <Loader/> }.into_any(),
                Some(Err(e)) => {
                    log::warn!("logsheet: {e}");
                    view! { <p class="logsheet__empty">"No data available."</p> }.into_any()
                }
                Some(Ok(ships)) if ships.is_empty() => {
                    view! { <p class="logsheet__empty">"No data available."</p> }.into_any()
                }
                Some(Ok(ships)) => ships.into_iter().map(|ship| view! { <ShipCard ship/> }).collect_view().into_any(),
            }}
        </section>
    }
}

#[component]
fn ShipCard(ship: ShipEnvelope) -> impl IntoView {
    let navigate = use_navigate();
    let info = ship.data.ship;
    let stats = ship.data.statistic;
    let target = ship_path(&info.id);
    let on_open = move |_| navigate(&target, NavigateOptions::default());

    view! {
        <div class="ship-card">
            <div class="ship-card__header">
                <span class="ship-card__name">{info.name.clone()}</span>
                <span class="ship-card__code">{info.code}</span>
            </div>
            <img class="ship-card__thumbnail" src=info.thumbnail alt=info.name/>
            <dl class="ship-card__stats">
                <dt>"Downtime"</dt>
                <dd>{stats.downtime}</dd>
                <dt>"Fuel In"</dt>
                <dd>{stats.fuel_in}</dd>
                <dt>"Fuel Out"</dt>
                <dd>{stats.fuel_out}</dd>
                <dt>"Timah"</dt>
                <dd>{stats.timah}</dd>
                <dt>"Tailing"</dt>
                <dd>{stats.tailing}</dd>
            </dl>
            <button type="button" class="ship-card__open" on:click=on_open>
                "Open"
            </button>
        </div>
    }
}
