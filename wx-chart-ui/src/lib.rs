//! Shared Dioxus components and Chart.js bridge for the forecast viewer.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Chart.js trend chart via `js_sys::eval()`
//! - `fetch`: browser `fetch()` transport for `POST /predict`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, list, summary, chart canvas)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
