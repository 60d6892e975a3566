use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router, middleware};
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::errors::{ApiError, ValidationError};
use crate::middlewares::{TokenState, auth};
use crate::models::Reading;
use crate::repositories::ReadingRepository;

const DEFAULT_WINDOW_HOURS: i64 = 24;

#[derive(Serialize, Deserialize, Clone)]
pub struct WindowQuery {
    /// Look-back window in hours. Kept as a raw string so a non-numeric
    /// value turns into a 400 instead of an extractor rejection.
    hours: Option<String>,
}

#[derive(Clone)]
pub struct DataState {
    pub reading_repository: Arc<ReadingRepository>,
}

pub fn data_router(data_state: DataState, token_state: TokenState) -> Router {
    Router::new()
        .route(
            "/api/data",
            get(get_readings).route_layer(middleware::from_fn_with_state(token_state, auth)),
        )
        .with_state(data_state)
}

pub async fn get_readings(
    Query(query): Query<WindowQuery>,
    State(state): State<DataState>,
) -> Result<Json<Vec<Reading>>, ApiError> {
    let hours = match query.hours {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidHours)?,
        None => DEFAULT_WINDOW_HOURS,
    };

    // Checked arithmetic: a window too large to represent is a client
    // error, not a panic. Negative hours stay accepted and yield a start
    // time in the future, so the result set is simply empty.
    let window = hours
        .checked_mul(3600)
        .map(Duration::seconds)
        .ok_or(ValidationError::HoursOutOfRange)?;
    let start_time = OffsetDateTime::now_utc()
        .checked_sub(window)
        .ok_or(ValidationError::HoursOutOfRange)?;

    let readings = state.reading_repository.find_since(start_time).await?;

    Ok(Json(readings))
}
