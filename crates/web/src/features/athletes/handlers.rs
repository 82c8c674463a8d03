use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use storage::dto::athlete::{AthleteDetail, Competitor};
use storage::dto::stats::HistoricalData;
use utoipa::IntoParams;
use validator::Validate;

use crate::error::WebResult;
use crate::features::resolve_season;
use crate::state::AppState;

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
pub struct AthleteListParams {
    /// Season token, e.g. "2024/2025". Defaults to the current season.
    pub season: Option<String>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct HistoricalParams {
    /// Lookback window in years.
    #[serde(default = "default_years")]
    #[validate(range(min = 1, max = 20, message = "years must be between 1 and 20"))]
    pub years: u32,
}

fn default_years() -> u32 {
    5
}

#[utoipa::path(
    get,
    path = "/api/athletes",
    params(AthleteListParams),
    responses(
        (status = 200, description = "Season standings joined with athlete biographies", body = Vec<Competitor>)
    ),
    tag = "athletes"
)]
pub async fn list_athletes(
    State(state): State<AppState>,
    Query(params): Query<AthleteListParams>,
) -> WebResult<Response> {
    let Some(season) = resolve_season(params.season.as_deref()) else {
        return Ok(Json(Vec::<Competitor>::new()).into_response());
    };

    let roster = services::list_competitors(&state.data, season);

    Ok(Json(roster).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/{athlete_id}",
    params(
        ("athlete_id" = String, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete detail; synthesized (and flagged) for unknown ids", body = AthleteDetail)
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(state): State<AppState>,
    Path(athlete_id): Path<String>,
) -> WebResult<Response> {
    let detail = services::competitor_details(&state.data, &athlete_id);

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/{athlete_id}/historical",
    params(
        ("athlete_id" = String, Path, description = "Athlete id"),
        HistoricalParams
    ),
    responses(
        (status = 200, description = "Historical projection; basis marks athletes without recorded careers", body = HistoricalData),
        (status = 400, description = "Validation error")
    ),
    tag = "athletes"
)]
pub async fn get_athlete_historical(
    State(state): State<AppState>,
    Path(athlete_id): Path<String>,
    Query(params): Query<HistoricalParams>,
) -> WebResult<Response> {
    params.validate()?;

    let projection = services::historical_stats(&state.data, &athlete_id, params.years, Utc::now());

    Ok(Json(projection).into_response())
}
