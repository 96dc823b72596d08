//! Record listings: transactions and the tin-ore stages.
//!
//! The same page serves fleet-wide routes (`/tin-ore/production`) and
//! ship-scoped ones (`/ship/:id/tin-ore/production`); a present `id`
//! parameter narrows the request to that ship.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use leptos::prelude::*;
use navigation::redirect::encode_component;

use crate::components::loader::Loader;
use crate::components::record_table::RecordTable;
use crate::config::AppConfig;
use crate::net::api::fetch_records;
use crate::routes::TinOreStage;
use crate::util::location::use_route_param;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordSource {
    Transaction,
    TinOre(TinOreStage),
}

impl RecordSource {
    pub fn title(self) -> &'static str {
        match self {
            RecordSource::Transaction => "Transaction",
            RecordSource::TinOre(stage) => stage.title(),
        }
    }
}

/// API path (relative to the API origin) listing records of `source`.
pub(crate) fn records_path(source: RecordSource, ship_id: Option<&str>) -> String {
    let base = match source {
        RecordSource::Transaction => "/odyssey/transaction".to_owned(),
        RecordSource::TinOre(stage) => format!("/odyssey/tin-ore/{}", stage.slug()),
    };
    match ship_id {
        Some(id) => format!("{base}?ship_id={}", encode_component(id)),
        None => base,
    }
}

#[component]
pub fn RecordsPage(source: RecordSource) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let ship_id = use_route_param("id");
    let records = LocalResource::new(move || {
        let config = config.clone();
        let path = records_path(source, ship_id.get().as_deref());
        async move { fetch_records(&config, &path).await }
    });

    view! {
        <section class="records">
            <h2 class="records__title">{source.title()}</h2>
            {move || match records.get() {
                None => view! { <Loader/> }.into_any(),
                Some(Ok(rows)) => view! { <RecordTable rows/> }.into_any(),
                Some(Err(e)) => {
                    log::warn!("records {}: {e}", source.title());
                    view! { <p class="records__empty">"No data available."</p> }.into_any()
                }
            }}
        </section>
    }
}
