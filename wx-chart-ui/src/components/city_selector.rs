//! Dropdown selector for choosing a city.

use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::city::CITIES;

/// City dropdown selector.
/// Lists every known city in display order and updates selected_city on change.
#[component]
pub fn CitySelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_city)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        log::info!("City changed to {}", value);
        state.selected_city.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "city-select",
                style: "font-weight: bold; margin-right: 8px;",
                "City: "
            }
            select {
                id: "city-select",
                onchange: on_change,
                for city in CITIES.iter() {
                    option {
                        value: "{city.code}",
                        selected: city.code == selected,
                        "{city.label}"
                    }
                }
            }
        }
    }
}
