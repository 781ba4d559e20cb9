//! Vietnam 7-day Weather Forecast
//!
//! Lets the user pick a city and an end date, asks the forecast service for
//! the following days and shows a daily list, a Chart.js temperature trend
//! and the service's textual summary.
//!
//! Data flow:
//! 1. On mount: the city dropdown starts on the default city, the date picker
//!    on today's local date, and the background mood is picked from the hour.
//! 2. The fetch effect reads both controls, so it runs once on mount and
//!    again on every change, each run starting one fetch cycle.
//! 3. Each cycle `POST`s to `/predict` and applies the result to the panel
//!    only if no newer cycle was started meanwhile.

use dioxus::prelude::*;
use wx_chart_ui::components::{
    ChartContainer, CitySelector, EndDatePicker, ForecastList, SummaryPanel, TrendHeader,
};
use wx_chart_ui::fetch::WebTransport;
use wx_chart_ui::js_bridge::{self, JsChart};
use wx_chart_ui::state::{AppState, CHART_CANVAS_ID};
use wx_core::bootstrap::Startup;
use wx_core::client::{request_forecast, ForecastPanel, Selection};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("forecast-root"))
        .launch(App);
}

/// One fetch cycle. The panel is only borrowed before and after the await so
/// a newer cycle can begin while this one is in flight.
async fn run_fetch(mut panel: Signal<ForecastPanel<JsChart>>, selection: Selection) {
    let ticket = panel.write().begin(&selection);
    let outcome = request_forecast(&WebTransport::new(), &ticket.request).await;
    if !panel.write().complete(&ticket, outcome) {
        log::debug!("Ignored superseded forecast for {}", ticket.request.city);
    }
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| {
        let startup = Startup::now();
        log::info!(
            "Starting on {} with {} mood",
            startup.selection.city,
            startup.mood
        );
        AppState::new(&startup)
    });

    // ─── Effect 1: Load chart script once on mount ───
    use_effect(move || {
        js_bridge::init_charts();
    });

    // ─── Effect 2: Fetch on mount and whenever city or end date change ───
    use_effect(move || {
        let selection = state.selection();
        spawn(run_fetch(state.panel, selection));
    });

    let mood = (state.mood)();
    let mood_class = mood.css_class();
    let root_style = format!(
        "min-height: 100vh; background: {}; font-family: system-ui, -apple-system, sans-serif;",
        mood.background()
    );

    // ─── Render ───
    rsx! {
        div {
            class: "{mood_class}",
            style: "{root_style}",
            div {
                style: "max-width: 900px; margin: 0 auto; padding: 16px;",
                h2 { style: "margin: 0 0 8px 0;", "7-day Weather Forecast" }

                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap; align-items: center;",
                    CitySelector {}
                    EndDatePicker {}
                }

                ForecastList {}

                TrendHeader {}
                ChartContainer {
                    id: CHART_CANVAS_ID.to_string(),
                    height: 320,
                }

                SummaryPanel {}
            }
        }
    }
}
