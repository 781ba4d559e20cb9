//! Summary text with the optional headline and event badges.

use crate::components::EventBadges;
use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the loading text, an error message or the service's summary verbatim.
#[component]
pub fn SummaryPanel() -> Element {
    let state = use_context::<AppState>();
    let (summary, headline) = {
        let panel = state.panel.read();
        (panel.summary.clone(), panel.headline.clone())
    };

    rsx! {
        div {
            style: "margin: 12px 0; padding: 12px 16px; border-radius: 8px; background: rgba(255, 255, 255, 0.3);",
            if let Some(headline) = headline {
                h3 { style: "margin: 0 0 6px 0; font-size: 15px;", "{headline}" }
            }
            EventBadges {}
            p {
                id: "summary-text",
                style: "margin: 0; line-height: 1.5;",
                "{summary}"
            }
        }
    }
}
