use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::dto::search::SearchHit;
use utoipa::IntoParams;

use crate::error::WebResult;
use crate::features::resolve_season;
use crate::state::AppState;

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Free-text query.
    pub q: String,
    /// Season token, e.g. "2024/2025". Defaults to the current season.
    pub season: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Ranked athlete/location/race hits, capped per category", body = Vec<SearchHit>),
        (status = 204, description = "Query superseded by a newer one")
    ),
    tag = "search"
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> WebResult<Response> {
    // Last-query-wins: wait out the debounce window and drop this query if a
    // newer keystroke arrived meanwhile.
    if !state.search_debounce.acquire().await {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let Some(season) = resolve_season(params.season.as_deref()) else {
        return Ok(Json(Vec::<SearchHit>::new()).into_response());
    };

    let hits = services::search_entities(&state.data, season, &params.q);

    Ok(Json(hits).into_response())
}
