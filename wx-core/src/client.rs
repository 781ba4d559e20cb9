//! Forecast client: one fetch cycle per selection change.
//!
//! A cycle is split in three so the browser app can hold the panel in a
//! signal and only borrow it around the await point:
//! 1. [`ForecastPanel::begin`] shows the loading text, clears the list and
//!    hands out a [`FetchTicket`].
//! 2. [`request_forecast`] performs the single POST and classifies the result.
//! 3. [`ForecastPanel::complete`] applies the result, unless a newer ticket
//!    has been issued in the meantime, in which case the result is dropped.

use crate::chart::{ChartBackend, ChartController, ChartRender};
use crate::city::{get_bias, DEFAULT_CITY};
use crate::error::Result;
use crate::forecast::{ForecastEvent, ForecastRequest, ForecastResponse};
use crate::render::{build_rows, ForecastRow, TrendChart};
use log::{debug, error, info, warn};

/// Path of the prediction endpoint.
pub const PREDICT_PATH: &str = "/predict";

pub const LOADING_TEXT: &str = "Loading forecast...";
pub const UNREACHABLE_TEXT: &str = "Cannot connect to the forecast server.";
pub const MALFORMED_TEXT: &str = "Malformed response from the forecast server.";

/// Status and raw body of an HTTP response.
#[derive(Debug, PartialEq, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends the `/predict` request. `Err` means no HTTP response was received.
#[allow(async_fn_in_trait)]
pub trait ForecastTransport {
    async fn post_forecast(&self, request: &ForecastRequest) -> Result<HttpReply>;
}

/// Current values of the city and end-date controls.
#[derive(Debug, PartialEq, Clone)]
pub struct Selection {
    pub city: String,
    pub end_date: Option<String>,
}

impl Selection {
    /// An empty date input means "no explicit end date".
    pub fn new(city: &str, end_date: &str) -> Self {
        let end_date = end_date.trim();
        Selection {
            city: city.to_string(),
            end_date: (!end_date.is_empty()).then(|| end_date.to_string()),
        }
    }

    pub fn request(&self) -> ForecastRequest {
        ForecastRequest {
            city: self.city.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            city: DEFAULT_CITY.to_string(),
            end_date: None,
        }
    }
}

/// One issued fetch. The bias is captured when the fetch starts.
#[derive(Debug, PartialEq, Clone)]
pub struct FetchTicket {
    seq: u64,
    pub bias: i32,
    pub request: ForecastRequest,
}

/// Result of a single `/predict` call.
#[derive(Debug, PartialEq, Clone)]
pub enum FetchOutcome {
    Loaded(ForecastResponse),
    HttpError { status: u16, body: String },
    Unreachable(String),
    Malformed(String),
}

/// Perform the POST and classify what came back. Never retries.
pub async fn request_forecast<T>(transport: &T, request: &ForecastRequest) -> FetchOutcome
where
    T: ForecastTransport + ?Sized,
{
    match transport.post_forecast(request).await {
        Err(e) => {
            error!("Forecast request for {} failed: {}", request.city, e);
            FetchOutcome::Unreachable(e.to_string())
        }
        Ok(reply) if !reply.is_success() => {
            warn!(
                "Forecast request for {} returned {}: {}",
                request.city, reply.status, reply.body
            );
            FetchOutcome::HttpError {
                status: reply.status,
                body: reply.body,
            }
        }
        Ok(reply) => match ForecastResponse::from_json(&reply.body) {
            Ok(response) => FetchOutcome::Loaded(response),
            Err(e) => {
                error!("Forecast response for {} is malformed: {}", request.city, e);
                FetchOutcome::Malformed(e.to_string())
            }
        },
    }
}

/// Everything the forecast section of the page shows.
pub struct ForecastPanel<B: ChartBackend> {
    pub summary: String,
    pub rows: Vec<ForecastRow>,
    pub headline: Option<String>,
    pub events: Vec<ForecastEvent>,
    chart: ChartController<B>,
    issued: u64,
}

impl<B: ChartBackend> ForecastPanel<B> {
    pub fn new(backend: B) -> Self {
        Self {
            summary: String::new(),
            rows: Vec::new(),
            headline: None,
            events: Vec::new(),
            chart: ChartController::new(backend),
            issued: 0,
        }
    }

    /// Start a fetch cycle: loading text, list cleared before the request goes out.
    pub fn begin(&mut self, selection: &Selection) -> FetchTicket {
        self.issued += 1;
        self.summary = LOADING_TEXT.to_string();
        self.rows.clear();
        self.headline = None;
        self.events.clear();
        info!(
            "Fetching forecast #{} for {} until {:?}",
            self.issued, selection.city, selection.end_date
        );
        FetchTicket {
            seq: self.issued,
            bias: get_bias(&selection.city),
            request: selection.request(),
        }
    }

    pub fn is_latest(&self, ticket: &FetchTicket) -> bool {
        ticket.seq == self.issued
    }

    /// Apply an outcome. Returns false if the ticket was superseded and the outcome dropped.
    pub fn complete(&mut self, ticket: &FetchTicket, outcome: FetchOutcome) -> bool {
        if !self.is_latest(ticket) {
            debug!(
                "Dropping stale forecast #{} (latest is #{})",
                ticket.seq, self.issued
            );
            return false;
        }
        match outcome {
            FetchOutcome::Loaded(response) => {
                self.render(&response, ticket.bias);
            }
            FetchOutcome::HttpError { status, .. } => {
                self.summary = format!("Bad Request ({})", status);
            }
            FetchOutcome::Unreachable(_) => {
                self.summary = UNREACHABLE_TEXT.to_string();
            }
            FetchOutcome::Malformed(_) => {
                self.summary = MALFORMED_TEXT.to_string();
            }
        }
        true
    }

    /// Render a response: list rows, then the chart, then the summary verbatim.
    pub fn render(&mut self, response: &ForecastResponse, bias: i32) -> ChartRender {
        self.rows = build_rows(&response.forecast, bias);
        self.headline = response.headline();
        self.events = response.active_events();
        let drawn = self.chart.render(&TrendChart::from_rows(&self.rows));
        self.summary = response.summary.clone();
        drawn
    }

    /// Run a whole cycle while holding the panel. Used where nothing else can
    /// issue a fetch during the await (CLI, tests).
    pub async fn fetch_forecast<T>(&mut self, transport: &T, selection: &Selection) -> bool
    where
        T: ForecastTransport + ?Sized,
    {
        let ticket = self.begin(selection);
        let outcome = request_forecast(transport, &ticket.request).await;
        self.complete(&ticket, outcome)
    }

    pub fn chart(&self) -> &ChartController<B> {
        &self.chart
    }
}
