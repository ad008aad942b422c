//! Dashboard support handlers: navigation model and usage forecast.

use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use energy_core::{Forecast, Navigation};

use crate::error::ApiError;

/// Navigation query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct NavigationParams {
    /// Whether the caller has an authenticated session.
    #[serde(default)]
    pub authenticated: bool,
    /// Whether the mobile menu is currently open.
    #[serde(default)]
    pub menu_open: bool,
}

/// Navigation bar model for the caller's state.
pub async fn navigation(Query(params): Query<NavigationParams>) -> Json<Navigation> {
    Json(Navigation::new(params.menu_open, params.authenticated))
}

/// Forecast query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ForecastParams {
    /// Hour of day to predict for.
    pub hour: Option<String>,
}

/// Forecast response.
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    /// Requested hour.
    pub hour: f64,
    /// Predicted usage.
    pub prediction: f64,
}

/// Predicted usage at an hour of day.
pub async fn forecast(
    Query(params): Query<ForecastParams>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let hour = params
        .hour
        .as_deref()
        .and_then(|h| h.trim().parse::<f64>().ok())
        .filter(|h| h.is_finite())
        .ok_or_else(|| ApiError::Validation(vec!["Invalid hour".into()]))?;

    Ok(Json(ForecastResponse {
        hour,
        prediction: Forecast::reference().predict(hour),
    }))
}
