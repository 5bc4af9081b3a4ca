//! Rate estimation: the full fetch, reduce, fit, report pipeline.

use gmsl_star::fit::{fit_line, LineFit};
use gmsl_star::table::SeaLevelTable;
use log::info;
use reqwest::Client;

use crate::chart;

/// Format the fitted slope as the human-readable rate line.
pub fn rate_summary(fit: &LineFit) -> String {
    format!("rate of sea level rise is {:.2} mm/yr", fit.slope)
}

/// Estimate the rate of global sea level rise and render both charts.
///
/// Each stage runs to completion before the next; any failure aborts the
/// run before the rate line or any chart is produced.
pub async fn run_rate(url: &str, series_png: &str, trend_png: &str) -> anyhow::Result<()> {
    let client = Client::new();
    info!("Fetching sea level data from {}", url);
    let table = SeaLevelTable::fetch(&client, url).await?;
    info!(
        "{} observations across {} missions",
        table.observations.len(),
        table.missions.len()
    );

    let series = table.minimum_series();
    let points = table.fit_points();
    info!(
        "Minimum series derived ({} of {} rows usable)",
        points.len(),
        series.len()
    );

    let fit = fit_line(&points)?;
    info!(
        "Fitted line: slope {:.4} mm/yr, intercept {:.4} mm",
        fit.slope, fit.intercept
    );

    chart::render_minimum_chart(series_png, &points)?;
    chart::render_trend_chart(trend_png, &points, &fit)?;
    info!("Charts written to {} and {}", series_png, trend_png);

    println!("{}", rate_summary(&fit));
    Ok(())
}
