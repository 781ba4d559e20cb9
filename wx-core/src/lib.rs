//! Core of the Vietnam weather forecast viewer.
//!
//! Everything here is plain Rust so it compiles both to `wasm32-unknown-unknown`
//! (for the Dioxus app) and natively (for the CLI and the tests):
//! - `bootstrap`: default city, date and mood the page starts with
//! - `city`: the static city list and per-city temperature bias table
//! - `condition`: condition classification and wind level labels
//! - `mood`: background theme for the hour of day
//! - `forecast`: request/response wire types for `POST /predict`
//! - `render`: list rows and trend chart series derived from a response
//! - `chart`: create-or-update controller around a chart backend
//! - `client`: forecast panel state machine and the transport seam
//! - `api` (feature `api`): `reqwest` transport for native callers

pub mod bootstrap;
pub mod chart;
pub mod city;
pub mod client;
pub mod condition;
pub mod dates;
pub mod error;
pub mod forecast;
pub mod mood;
pub mod render;

#[cfg(feature = "api")]
pub mod api;

pub use error::{ForecastError, Result};
