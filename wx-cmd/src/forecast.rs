//! `forecast` subcommand: fetch from `/predict` and print the result.

use log::{info, warn};
use std::io;
use wx_core::api::HttpTransport;
use wx_core::chart::NoChart;
use wx_core::city::{find_city, DEFAULT_BIAS};
use wx_core::client::{request_forecast, FetchOutcome, ForecastPanel, Selection};
use wx_core::dates;
use wx_core::render::ForecastRow;

/// Fetch one forecast and print it. Errors carry the same text the page shows.
pub async fn run_forecast(
    city: &str,
    end_date: Option<&str>,
    server: &str,
    csv_path: Option<&str>,
) -> anyhow::Result<()> {
    let city = city.trim().to_lowercase();
    if find_city(&city).is_none() {
        warn!(
            "Unknown city code '{}', using default bias {}",
            city, DEFAULT_BIAS
        );
    }
    if let Some(date) = end_date {
        dates::parse_date(date)?;
    }

    let selection = Selection::new(&city, end_date.unwrap_or(""));
    let transport = HttpTransport::new(server)?;
    info!("Requesting forecast for {} from {}", city, transport.url());

    let mut panel = ForecastPanel::new(NoChart);
    let ticket = panel.begin(&selection);
    let outcome = request_forecast(&transport, &ticket.request).await;
    let loaded = matches!(outcome, FetchOutcome::Loaded(_));
    panel.complete(&ticket, outcome);
    if !loaded {
        anyhow::bail!("{}", panel.summary);
    }

    print!("{}", format_panel(&panel));

    if let Some(path) = csv_path {
        let file = std::fs::File::create(path)?;
        write_rows_csv(file, &panel.rows)?;
        info!("Wrote {} rows to {}", panel.rows.len(), path);
    }
    Ok(())
}

/// Terminal rendering of a loaded panel.
pub fn format_panel(panel: &ForecastPanel<NoChart>) -> String {
    let mut out = String::new();
    if let Some(headline) = &panel.headline {
        out.push_str(&format!("{}\n\n", headline));
    }
    for row in &panel.rows {
        out.push_str(&format!(
            "{:<4} {:<10} {}  {:>7}  rain {:<3} wind {}\n",
            row.day_label,
            row.date.as_deref().unwrap_or(""),
            row.condition.glyph(),
            row.temperature_text(),
            row.rain_level,
            row.wind_text(),
        ));
    }
    if !panel.events.is_empty() {
        let labels: Vec<&str> = panel.events.iter().map(|e| e.label()).collect();
        out.push_str(&format!("\nEvents: {}\n", labels.join(", ")));
    }
    out.push_str(&format!("\n{}\n", panel.summary));
    out
}

/// Write rows as CSV: day,date,condition,temperature_c,rain_level,wind.
pub fn write_rows_csv<W: io::Write>(writer: W, rows: &[ForecastRow]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["day", "date", "condition", "temperature_c", "rain_level", "wind"])?;
    for row in rows {
        wtr.write_record([
            row.day_label.clone(),
            row.date.clone().unwrap_or_default(),
            row.condition.id().to_string(),
            format!("{:.1}", row.temperature),
            row.rain_level.to_string(),
            row.wind_text().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wx_core::forecast::{ForecastDay, ForecastResponse};

    fn loaded_panel() -> ForecastPanel<NoChart> {
        let mut panel = ForecastPanel::new(NoChart);
        let response = ForecastResponse::new(
            vec![
                ForecastDay::new("T2", 30.0),
                ForecastDay::new("T3", 29.0).with_levels(3.0, 2.0),
            ],
            "Storm on Tuesday",
        );
        panel.render(&response, 4);
        panel
    }

    #[test]
    fn test_format_panel() {
        let text = format_panel(&loaded_panel());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("T2"));
        assert!(lines[0].contains("34.0°C"));
        assert!(lines[1].contains("⛈️"));
        assert!(lines[1].contains("wind moderate"));
        assert_eq!(*lines.last().unwrap(), "Storm on Tuesday");
    }

    #[test]
    fn test_write_rows_csv() {
        let mut buf = Vec::new();
        write_rows_csv(&mut buf, &loaded_panel().rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "day,date,condition,temperature_c,rain_level,wind\n\
             T2,,hot,34.0,0,weak\n\
             T3,,storm,33.0,3,moderate\n"
        );
    }

    #[tokio::test]
    async fn test_bad_date_is_rejected_before_request() {
        let err = run_forecast("hanoi", Some("01/05/2024"), "http://127.0.0.1:9", None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}
