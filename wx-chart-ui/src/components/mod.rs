//! Reusable Dioxus RSX components for the forecast viewer.

mod chart_container;
mod city_selector;
mod end_date_picker;
mod event_badges;
mod forecast_list;
mod summary_panel;
mod trend_header;

pub use chart_container::ChartContainer;
pub use city_selector::CitySelector;
pub use end_date_picker::EndDatePicker;
pub use event_badges::EventBadges;
pub use forecast_list::ForecastList;
pub use summary_panel::SummaryPanel;
pub use trend_header::TrendHeader;
