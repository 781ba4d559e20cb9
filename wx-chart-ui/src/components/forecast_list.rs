//! Daily forecast list.

use crate::state::AppState;
use dioxus::prelude::*;

/// Display strings for one list entry.
#[derive(Clone, PartialEq)]
struct DayItem {
    label: String,
    date: Option<String>,
    class: String,
    glyph: &'static str,
    temperature: String,
}

/// One entry per forecast day: label, condition glyph and adjusted high.
#[component]
pub fn ForecastList() -> Element {
    let state = use_context::<AppState>();
    let items: Vec<DayItem> = state
        .panel
        .read()
        .rows
        .iter()
        .map(|row| DayItem {
            label: row.day_label.clone(),
            date: row.date.clone(),
            class: format!("forecast-day condition-{}", row.condition.id()),
            glyph: row.condition.glyph(),
            temperature: row.temperature_text(),
        })
        .collect();

    rsx! {
        ul {
            id: "daily-forecast",
            style: "list-style: none; padding: 0; margin: 8px 0; display: flex; gap: 8px; overflow-x: auto;",
            for (idx, item) in items.into_iter().enumerate() {
                li {
                    key: "{idx}",
                    class: "{item.class}",
                    style: "flex: 1 0 80px; text-align: center; padding: 8px; border-radius: 8px; background: rgba(255, 255, 255, 0.25);",
                    div { style: "font-weight: bold;", "{item.label}" }
                    if let Some(date) = item.date {
                        div { style: "font-size: 11px; opacity: 0.7;", "{date}" }
                    }
                    div { style: "font-size: 28px;", "{item.glyph}" }
                    div { "{item.temperature}" }
                }
            }
        }
    }
}
