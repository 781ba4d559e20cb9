//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The trend chart lives in `assets/js/trend-chart.js` and is drawn with
//! Chart.js, which the page loads from its `<head>`. The script is evaluated
//! at global scope once Chart.js is present and its functions are exposed via
//! `window.*`. This module serialises chart data and calls those globals.

use wx_core::chart::ChartBackend;
use wx_core::render::TrendChart;

// Embed the chart JS at compile time
static TREND_CHART_JS: &str = include_str!("../assets/js/trend-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WX JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Whether Chart.js is loaded on the page.
pub fn chart_library_loaded() -> bool {
    js_sys::eval("typeof Chart !== 'undefined'")
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Initialize the chart script with a wait-for-Chart.js polling loop.
///
/// `trend-chart.js` defines its functions with `function` declarations. They
/// are evaluated at global scope via indirect eval once Chart.js is ready and
/// then promoted to `window.*` explicitly. Gives up after ~10s, leaving the
/// page without a chart.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__wxChartsReady) {{ window.__wxChartScripts = {}; }}",
        serde_json::to_string(TREND_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__wxChartsReady || window.__wxChartsPolling) { return; }
            window.__wxChartsPolling = true;
            var attempts = 0;
            var waitForChart = setInterval(function() {
                attempts += 1;
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChart);
                    (0, eval)(window.__wxChartScripts);
                    delete window.__wxChartScripts;
                    if (typeof renderTrendChart !== 'undefined') window.renderTrendChart = renderTrendChart;
                    if (typeof updateTrendChart !== 'undefined') window.updateTrendChart = updateTrendChart;
                    window.__wxChartsReady = true;
                    console.log('WX charts initialized');
                } else if (attempts > 100) {
                    clearInterval(waitForChart);
                    console.warn('WX charts: Chart.js never loaded, trend chart disabled');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Call `window.<function>(canvasId, dataJson)` once the scripts are ready and
/// the canvas is mounted.
fn call_when_ready(function: &str, canvas_id: &str, data_json: &str) {
    let canvas = serde_json::to_string(canvas_id).unwrap_or_default();
    let data = serde_json::to_string(data_json).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts += 1;
                if (window.__wxChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({canvas})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({canvas}, {data});
                    }} catch(e) {{ console.error('[WX] {function} error:', e); }}
                }} else if (attempts > 100) {{
                    clearInterval(poll);
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Draw a new trend chart on the given canvas.
pub fn render_trend_chart(canvas_id: &str, data_json: &str) {
    call_when_ready("renderTrendChart", canvas_id, data_json);
}

/// Replace labels and data of the existing chart on the canvas and refresh it.
pub fn update_trend_chart(canvas_id: &str, data_json: &str) {
    call_when_ready("updateTrendChart", canvas_id, data_json);
}

/// Chart.js backend for [`wx_core::chart::ChartController`].
///
/// The handle is the canvas id; the Chart.js instance itself stays on the JS
/// side in `window.__wxTrendCharts`.
pub struct JsChart {
    canvas_id: String,
}

impl JsChart {
    pub fn new(canvas_id: &str) -> Self {
        Self {
            canvas_id: canvas_id.to_string(),
        }
    }
}

fn chart_json(chart: &TrendChart) -> Option<String> {
    match serde_json::to_string(chart) {
        Ok(json) => Some(json),
        Err(e) => {
            log::error!("Failed to serialise trend chart: {}", e);
            None
        }
    }
}

impl ChartBackend for JsChart {
    type Handle = String;

    fn is_available(&self) -> bool {
        chart_library_loaded()
    }

    fn create(&mut self, chart: &TrendChart) -> Option<String> {
        let json = chart_json(chart)?;
        render_trend_chart(&self.canvas_id, &json);
        Some(self.canvas_id.clone())
    }

    fn update(&mut self, handle: &mut String, chart: &TrendChart) {
        if let Some(json) = chart_json(chart) {
            update_trend_chart(handle, &json);
        }
    }
}
