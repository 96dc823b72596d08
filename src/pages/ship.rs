//! Ship detail: identity, fuel, position log, and the ship sub-page menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside the main layout at `/ship/:id`. The `id` parameter comes
//! from the guard's match; both requests re-run when it changes.

#[cfg(test)]
#[path = "ship_test.rs"]
mod ship_test;

use leptos::prelude::*;
use navigation::redirect::encode_component;

use crate::components::loader::Loader;
use crate::config::AppConfig;
use crate::net::api::{fetch_coordinates, fetch_ship};
use crate::net::types::{CoordinateEnvelope, ShipEnvelope};
use crate::routes::TinOreStage;
use crate::util::location::use_route_param;

/// Ship sub-pages as `(label, href)`.
pub(crate) fn ship_menu(id: &str) -> Vec<(&'static str, String)> {
    let base = format!("/ship/{}", encode_component(id));
    let mut menu = vec![("Daily Ship Operation", format!("{base}/operation"))];
    menu.extend(
        [TinOreStage::Production, TinOreStage::Inventory, TinOreStage::Unloading]
            .into_iter()
            .map(|stage| (stage.title(), format!("{base}/tin-ore/{}", stage.slug()))),
    );
    menu
}

#[component]
pub fn ShipPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let ship_id = use_route_param("id");

    let ship_config = config.clone();
    let ship = LocalResource::new(move || {
        let config = ship_config.clone();
        let id = ship_id.get();
        async move {
            match id {
                Some(id) => fetch_ship(&config, &id).await,
                None => Ok(None),
            }
        }
    });
    let coordinates = LocalResource::new(move || {
        let config = config.clone();
        let id = ship_id.get();
        async move {
            match id {
                Some(id) => fetch_coordinates(&config, &id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let menu = move || {
        ship_id
            .get()
            .map(|id| {
                ship_menu(&id)
                    .into_iter()
                    .map(|(label, href)| view! { <a class="ship-menu__item" href=href>{label}</a> })
                    .collect_view()
            })
    };

    view! {
        <nav class="ship-menu">{menu}</nav>
        {move || match ship.get() {
            None => view! { <Loader/> }.into_any(),
            Some(Ok(Some(ship))) => ship_detail(ship).into_any(),
            Some(Ok(None)) => view! { <p class="ship__empty">"No data available."</p> }.into_any(),
            Some(Err(e)) => {
                log::warn!("ship: {e}");
                view! { <p class="ship__empty">"No data available."</p> }.into_any()
            }
        }}
        <h3 class="ship__section">"Position log"</h3>
        {move || match coordinates.get() {
            None => view! { <Loader/> }.into_any(),
            Some(Ok(rows)) => coordinate_table(rows).into_any(),
            Some(Err(e)) => {
                log::warn!("ship coordinates: {e}");
                view! { <p class="ship__empty">"No positions recorded."</p> }.into_any()
            }
        }}
    }
}

fn ship_detail(ship: ShipEnvelope) -> impl IntoView {
    let info = ship.data.ship;
    let fuel = ship.data.fuel;
    let stats = ship.data.statistic;

    view! {
        <div class="ship__detail">
            <img class="ship__thumbnail" src=info.thumbnail alt=info.name.clone()/>
            <h2 class="ship__name">{info.name}</h2>
            <p class="ship__code">{info.code}</p>
            <p class="ship__status">{info.usage_status} " / " {info.current_status}</p>
            <table class="ship__fuel">
                <tr>
                    <td>"Fuel Usage"</td>
                    <td>{fuel.total} "L"</td>
                </tr>
                <tr>
                    <td>"Fuel In"</td>
                    <td>{fuel.fuel_in} "L"</td>
                </tr>
                <tr>
                    <td>"Fuel Out"</td>
                    <td>{fuel.fuel_out} "L"</td>
                </tr>
                <tr>
                    <td>"Remaining"</td>
                    <td>{fuel.remain} "L"</td>
                </tr>
            </table>
            <p class="ship__downtime">"Downtime: " {stats.downtime}</p>
        </div>
    }
}

fn coordinate_table(rows: Vec<CoordinateEnvelope>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="ship__empty">"No positions recorded."</p> }.into_any();
    }
    let body = rows
        .into_iter()
        .map(|row| {
            let c = row.data.coordinate;
            view! {
                <tr>
                    <td>{c.date}</td>
                    <td>{c.latitude}</td>
                    <td>{c.longitude}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="ship__coordinates">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Latitude"</th>
                    <th>"Longitude"</th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
    .into_any()
}
