//! Chart rendering for the minimum sea level series and the fitted trend.
//!
//! This module is the only place that touches a plotting backend; the
//! numeric pipeline never does.

use anyhow::bail;
use gmsl_star::fit::LineFit;
use itertools::{Itertools, MinMaxResult};
use plotters::prelude::*;

const CHART_SIZE: (u32, u32) = (800, 600);

/// Vertical padding applied above and below the data, as a fraction of
/// the value range.
const Y_PAD: f64 = 0.05;

fn axis_bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    match values.minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(value) => Some((value, value)),
        MinMaxResult::MinMax(low, high) => Some((low, high)),
    }
}

fn chart_ranges(
    points: &[(f64, f64)],
) -> anyhow::Result<(std::ops::Range<f64>, std::ops::Range<f64>)> {
    let (Some((x_min, x_max)), Some((y_min, y_max))) = (
        axis_bounds(points.iter().map(|&(x, _)| x)),
        axis_bounds(points.iter().map(|&(_, y)| y)),
    ) else {
        bail!("no points to draw");
    };
    let pad = (y_max - y_min).abs().max(1.0) * Y_PAD;
    Ok((x_min..x_max, (y_min - pad)..(y_max + pad)))
}

/// Render the minimum sea level series as a line chart.
pub fn render_minimum_chart(path: &str, points: &[(f64, f64)]) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_range, y_range) = chart_ranges(points)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Global mean sea level", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_labels(10)
        .x_desc("Year")
        .y_desc("Sea level anomaly (mm)")
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;

    root.present()?;
    Ok(())
}

/// Render the minimum series with the fitted line overlaid in a distinct
/// style, with a legend for both series.
pub fn render_trend_chart(path: &str, points: &[(f64, f64)], fit: &LineFit) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_range, y_range) = chart_ranges(points)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Global mean sea level trend", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_labels(10)
        .x_desc("Year")
        .y_desc("Sea level anomaly (mm)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))?
        .label("minimum sea level")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|&(x, _)| (x, fit.value_at(x))),
            &RED,
        ))?
        .label("linear fit")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
