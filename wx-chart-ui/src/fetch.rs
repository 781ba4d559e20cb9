//! Browser `fetch()` transport for `POST /predict`.
//!
//! No timeout and no abort: a request that never settles leaves the panel in
//! its loading state until the next selection change supersedes it.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};
use wx_core::client::{ForecastTransport, HttpReply, PREDICT_PATH};
use wx_core::forecast::ForecastRequest;
use wx_core::{ForecastError, Result};

/// Posts to the page's own origin.
pub struct WebTransport {
    url: String,
}

impl WebTransport {
    pub fn new() -> Self {
        Self::with_url(PREDICT_PATH)
    }

    pub fn with_url(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

impl Default for WebTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn js_error(value: JsValue) -> ForecastError {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value));
    ForecastError::Transport(message)
}

impl ForecastTransport for WebTransport {
    async fn post_forecast(&self, request: &ForecastRequest) -> Result<HttpReply> {
        let body =
            serde_json::to_string(request).map_err(|e| ForecastError::Encode(e.to_string()))?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from_str(&body));

        let req = Request::new_with_str_and_init(&self.url, &init).map_err(js_error)?;
        req.headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let window =
            web_sys::window().ok_or_else(|| ForecastError::Transport("no window".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        Ok(HttpReply {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}
