//! Table for loosely-typed JSON records.
//!
//! Columns are the union of top-level keys across object rows, in first-seen
//! order. Nested values render as compact JSON.

#[cfg(test)]
#[path = "record_table_test.rs"]
mod record_table_test;

use leptos::prelude::*;
use serde_json::Value;

pub(crate) fn record_columns(rows: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        let Value::Object(map) = row else {
            continue;
        };
        for key in map.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

pub(crate) fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[component]
pub fn RecordTable(rows: Vec<Value>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="record-table__empty">"No records."</p> }.into_any();
    }
    let columns = record_columns(&rows);
    let header = columns.iter().map(|c| view! { <th>{c.clone()}</th> }).collect::<Vec<_>>();
    let body = rows
        .iter()
        .map(|row| {
            let cells = columns
                .iter()
                .map(|c| view! { <td>{cell_text(row.get(c))}</td> })
                .collect::<Vec<_>>();
            view! { <tr>{cells}</tr> }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="record-table">
            <thead>
                <tr>{header}</tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
    .into_any()
}
