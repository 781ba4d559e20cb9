//! Native `reqwest` transport for the `/predict` endpoint.

use crate::client::{ForecastTransport, HttpReply, PREDICT_PATH};
use crate::error::{ForecastError, Result};
use crate::forecast::ForecastRequest;
use reqwest::Client;
use std::time::Duration;

/// Default base URL of a locally running forecast server.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";

pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ForecastError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            url: predict_url(base_url),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn predict_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PREDICT_PATH)
}

impl ForecastTransport for HttpTransport {
    async fn post_forecast(&self, request: &ForecastRequest) -> Result<HttpReply> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| ForecastError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ForecastError::Transport(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}
