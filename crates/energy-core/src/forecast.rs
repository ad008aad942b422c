//! Hourly usage forecast.
//!
//! A least-squares line fitted to reference usage by hour of day. The model is
//! deliberately small: it gives the dashboard a trend line, not a billing figure.

use serde::Serialize;

/// Reference usage (kWh) observed at hours 1 through 10.
const REFERENCE_USAGE: [f64; 10] = [1.2, 1.5, 1.7, 2.0, 2.3, 2.6, 2.9, 3.1, 3.3, 3.5];

/// A fitted linear usage model, `usage = slope * hour + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Forecast {
    /// Change in usage per hour.
    pub slope: f64,
    /// Usage at hour zero.
    pub intercept: f64,
}

impl Forecast {
    /// Fit an ordinary least-squares line through `(hour, usage)` samples.
    ///
    /// Returns `None` with fewer than two samples or when every sample shares
    /// the same hour.
    #[must_use]
    pub fn fit(samples: &[(f64, f64)]) -> Option<Self> {
        if samples.len() < 2 {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let n = samples.len() as f64;
        let mean_x = samples.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = samples.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (sxy, sxx) = samples.iter().fold((0.0, 0.0), |(sxy, sxx), (x, y)| {
            let dx = x - mean_x;
            (sxy + dx * (y - mean_y), sxx + dx * dx)
        });

        if sxx == 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    /// The model fitted to the reference usage profile.
    #[must_use]
    pub fn reference() -> Self {
        let samples: Vec<(f64, f64)> = (1..=10u8)
            .map(f64::from)
            .zip(REFERENCE_USAGE)
            .collect();

        // Ten distinct hours always produce a fit.
        Self::fit(&samples).unwrap_or(Self {
            slope: 0.0,
            intercept: 0.0,
        })
    }

    /// Predicted usage at `hour`.
    #[must_use]
    pub fn predict(&self, hour: f64) -> f64 {
        self.slope * hour + self.intercept
    }
}
