//! End date input for the forecast window.

use crate::state::AppState;
use dioxus::prelude::*;

/// Date picker; the forecast covers the days after this date.
#[component]
pub fn EndDatePicker() -> Element {
    let mut state = use_context::<AppState>();
    let end = (state.end_date)();

    let on_change = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "date-picker",
                style: "font-weight: bold; margin-right: 8px;",
                "Forecast after: "
            }
            input {
                id: "date-picker",
                r#type: "date",
                value: "{end}",
                onchange: on_change,
            }
        }
    }
}
