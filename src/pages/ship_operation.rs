//! Daily ship operation: fuel summary for one ship.

use leptos::prelude::*;

use crate::components::loader::Loader;
use crate::config::AppConfig;
use crate::net::api::fetch_ship;
use crate::net::types::FuelSummary;
use crate::util::location::use_route_param;

#[component]
pub fn ShipOperationPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let ship_id = use_route_param("id");
    let ship = LocalResource::new(move || {
        let config = config.clone();
        let id = ship_id.get();
        async move {
            match id {
                Some(id) => fetch_ship(&config, &id).await,
                None => Ok(None),
            }
        }
    });

    view! {
        <section class="operation">
            <h3 class="operation__title">"Fuel"</h3>
            {move || match ship.get() {
                None => view! { <Loader/> }.into_any(),
                Some(Ok(Some(ship))) => fuel_view(ship.data.fuel).into_any(),
                Some(Ok(None)) => view! { <p class="operation__empty">"No data available."</p> }.into_any(),
                Some(Err(e)) => {
                    log::warn!("ship operation: {e}");
                    view! { <p class="operation__empty">"No data available."</p> }.into_any()
                }
            }}
        </section>
    }
}

fn fuel_view(fuel: FuelSummary) -> impl IntoView {
    view! {
        <dl class="operation__fuel">
            <dt>"Total"</dt>
            <dd>{fuel.total} "L"</dd>
            <dt>"Fuel In"</dt>
            <dd>{fuel.fuel_in} "L"</dd>
            <dt>"Fuel Out"</dt>
            <dd>{fuel.fuel_out} "L"</dd>
            <dt>"Remaining"</dt>
            <dd>{fuel.remain} "L"</dd>
            <dt>"Last transaction"</dt>
            <dd>{fuel.last_transaction_date}</dd>
        </dl>
    }
}
