//! Title above the trend chart, naming the selected city and its bias.

use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::render::trend_caption;

#[component]
pub fn TrendHeader() -> Element {
    let state = use_context::<AppState>();
    let (title, unit) = trend_caption(&(state.selected_city)());

    rsx! {
        div {
            style: "margin: 16px 0 8px 0;",
            h3 { style: "margin: 0 0 4px 0; font-size: 16px;", "{title}" }
            p { style: "margin: 0; font-size: 12px; opacity: 0.75;", "{unit}" }
        }
    }
}
