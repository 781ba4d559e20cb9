//! Badges for weather events flagged by the forecast service.

use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::forecast::ForecastEvent;

fn badge_color(event: ForecastEvent) -> &'static str {
    match event {
        ForecastEvent::StormRisk | ForecastEvent::UrbanFloodRisk => "#C62828",
        ForecastEvent::Heatwave | ForecastEvent::HotDry => "#EF6C00",
        ForecastEvent::LongRain
        | ForecastEvent::HeavyRain
        | ForecastEvent::Showers
        | ForecastEvent::Thunderstorm => "#1565C0",
        ForecastEvent::StrongWind => "#546E7A",
        ForecastEvent::Comfortable => "#2E7D32",
    }
}

#[component]
pub fn EventBadges() -> Element {
    let state = use_context::<AppState>();
    let badges: Vec<(&'static str, &'static str, String)> = state
        .panel
        .read()
        .events
        .iter()
        .map(|e| {
            let style = format!(
                "padding: 2px 8px; border-radius: 10px; font-size: 12px; color: white; background: {};",
                badge_color(*e)
            );
            (e.key(), e.label(), style)
        })
        .collect();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 6px; margin: 6px 0;",
            for (key, label, style) in badges {
                span {
                    key: "{key}",
                    style: "{style}",
                    "{label}"
                }
            }
        }
    }
}
