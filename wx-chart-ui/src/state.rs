//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::js_bridge::JsChart;
use dioxus::prelude::*;
use wx_core::bootstrap::Startup;
use wx_core::client::{ForecastPanel, Selection};
use wx_core::mood::Mood;

/// DOM id of the trend chart canvas.
pub const CHART_CANVAS_ID: &str = "trend-chart";

/// Shared application state for the forecast viewer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Currently selected city code
    pub selected_city: Signal<String>,
    /// End date from the date picker ("" means no explicit end date)
    pub end_date: Signal<String>,
    /// Background theme applied to the app root
    pub mood: Signal<Mood>,
    /// Forecast list, summary and the chart instance
    pub panel: Signal<ForecastPanel<JsChart>>,
}

impl AppState {
    /// Create a new AppState seeded from the startup values.
    pub fn new(startup: &Startup) -> Self {
        Self {
            selected_city: Signal::new(startup.selection.city.clone()),
            end_date: Signal::new(startup.date_input()),
            mood: Signal::new(startup.mood),
            panel: Signal::new(ForecastPanel::new(JsChart::new(CHART_CANVAS_ID))),
        }
    }

    /// Snapshot of the two controls.
    pub fn selection(&self) -> Selection {
        Selection::new(&self.selected_city.read(), &self.end_date.read())
    }
}
