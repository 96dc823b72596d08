//! Default dashboard: fleet-wide summary.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route (`/`, also `/account`). Loads every ship once
//! and shows fleet totals above a per-ship table.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::loader::Loader;
use crate::config::AppConfig;
use crate::net::api::fetch_ships;
use crate::net::types::{ShipEnvelope, ShipStatistic};

/// Fleet totals shown in the summary cards.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FleetTotals {
    pub ships: usize,
    pub timah: f64,
    pub tailing: f64,
    pub fuel_out: f64,
    pub downtime: f64,
}

/// Numeric value of a display figure; blanks and garbage count as zero.
pub(crate) fn figure(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

pub(crate) fn fleet_totals(ships: &[ShipEnvelope]) -> FleetTotals {
    let sum = |pick: fn(&ShipStatistic) -> &str| -> f64 {
        ships.iter().map(|s| figure(pick(&s.data.statistic))).sum()
    };
    FleetTotals {
        ships: ships.len(),
        timah: sum(|s| s.timah.as_str()),
        tailing: sum(|s| s.tailing.as_str()),
        fuel_out: sum(|s| s.fuel_out.as_str()),
        downtime: sum(|s| s.downtime.as_str()),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let ships = LocalResource::new(move || {
        let config = config.clone();
        async move { fetch_ships(&config).await }
    });

    view! {
        <section class="dashboard">
            {move || match ships.get() {
                None => view! { <Loader/> }.into_any(),
                Some(Err(e)) => {
                    log::warn!("dashboard: {e}");
                    view! { <p class="dashboard__empty">"No data available."</p> }.into_any()
                }
                Some(Ok(ships)) => fleet_view(&ships).into_any(),
            }}
        </section>
    }
}

fn fleet_view(ships: &[ShipEnvelope]) -> impl IntoView + use<> {
    let totals = fleet_totals(ships);
    let rows = ships
        .iter()
        .map(|ship| {
            let info = &ship.data.ship;
            let stats = &ship.data.statistic;
            view! {
                <tr>
                    <td>{info.name.clone()}</td>
                    <td>{info.code.clone()}</td>
                    <td>{info.current_status.clone()}</td>
                    <td>{stats.timah.clone()}</td>
                    <td>{stats.tailing.clone()}</td>
                    <td>{stats.fuel_out.clone()}</td>
                    <td>{stats.downtime.clone()}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dashboard__totals">
            <div class="dashboard__card">"Ships: " {totals.ships}</div>
            <div class="dashboard__card">"Timah: " {totals.timah}</div>
            <div class="dashboard__card">"Tailing: " {totals.tailing}</div>
            <div class="dashboard__card">"Fuel out: " {totals.fuel_out} "L"</div>
            <div class="dashboard__card">"Downtime: " {totals.downtime}</div>
        </div>
        <table class="dashboard__table">
            <thead>
                <tr>
                    <th>"Ship"</th>
                    <th>"Code"</th>
                    <th>"Status"</th>
                    <th>"Timah"</th>
                    <th>"Tailing"</th>
                    <th>"Fuel out"</th>
                    <th>"Downtime"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
