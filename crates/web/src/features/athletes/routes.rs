use axum::{Router, routing::get};

use super::handlers::{get_athlete, get_athlete_historical, list_athletes};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_athletes))
        .route("/:athlete_id", get(get_athlete))
        .route("/:athlete_id/historical", get(get_athlete_historical))
}
