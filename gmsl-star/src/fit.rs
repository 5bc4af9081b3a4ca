//! Ordinary least squares line fitting.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StarError};

/// Least-squares line through a series: `value = slope * time + intercept`.
///
/// For the sea level series the slope is a rate in mm/yr.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LineFit {
    /// The fitted line evaluated at `x`.
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a first-degree polynomial to `(x, y)` points, minimizing the sum
/// of squared vertical distances:
///
/// ```text
/// slope     = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x^2)
/// intercept = (sum_y - slope * sum_x) / n
/// ```
///
/// Pairs with a missing y must be excluded by the caller. Requires at
/// least two points with non-identical x values; NaN or infinite inputs
/// propagate into the result undetected.
pub fn fit_line(points: &[(f64, f64)]) -> Result<LineFit> {
    if points.len() < 2 {
        return Err(StarError::InsufficientObservations {
            needed: 2,
            found: points.len(),
        });
    }

    let n = points.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for &(x, y) in points {
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(StarError::ConstantTimeAxis);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    Ok(LineFit { slope, intercept })
}
