use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::models::Location;

use crate::error::WebResult;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/locations",
    responses(
        (status = 200, description = "List all World Cup venues", body = Vec<Location>)
    ),
    tag = "locations"
)]
pub async fn list_locations(State(state): State<AppState>) -> WebResult<Response> {
    let locations = services::list_locations(&state.data);

    Ok(Json(locations).into_response())
}
