use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use storage::models::{Race, RaceResult};
use storage::repository::races::RaceWindow;
use utoipa::IntoParams;

use crate::error::{WebError, WebResult};
use crate::features::resolve_season;
use crate::state::AppState;

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
pub struct RaceListParams {
    /// Season token, e.g. "2024/2025". Defaults to the current season.
    pub season: Option<String>,
    /// Restrict to "upcoming" or "past" races relative to today.
    pub window: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/races",
    params(RaceListParams),
    responses(
        (status = 200, description = "Season race calendar", body = Vec<Race>),
        (status = 400, description = "Invalid window parameter")
    ),
    tag = "races"
)]
pub async fn list_races(
    State(state): State<AppState>,
    Query(params): Query<RaceListParams>,
) -> WebResult<Response> {
    let Some(season) = resolve_season(params.season.as_deref()) else {
        return Ok(Json(Vec::<Race>::new()).into_response());
    };

    let races = match params.window.as_deref() {
        None => services::list_races(&state.data, season),
        Some("upcoming") => services::list_races_in_window(
            &state.data,
            season,
            RaceWindow::Upcoming,
            Utc::now().date_naive(),
        ),
        Some("past") => services::list_races_in_window(
            &state.data,
            season,
            RaceWindow::Past,
            Utc::now().date_naive(),
        ),
        Some(other) => {
            return Err(WebError::BadRequest(format!(
                "window must be 'upcoming' or 'past', got '{other}'"
            )));
        }
    };

    Ok(Json(races).into_response())
}

#[utoipa::path(
    get,
    path = "/api/races/{race_id}/results",
    params(
        ("race_id" = String, Path, description = "Race id")
    ),
    responses(
        (status = 200, description = "Race results in rank order; empty for unknown or not-yet-run races", body = Vec<RaceResult>)
    ),
    tag = "races"
)]
pub async fn get_race_results(
    State(state): State<AppState>,
    Path(race_id): Path<String>,
) -> WebResult<Response> {
    let results = services::race_results(&state.data, &race_id);

    Ok(Json(results).into_response())
}
