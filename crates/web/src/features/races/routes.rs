use axum::{Router, routing::get};

use super::handlers::{get_race_results, list_races};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_races))
        .route("/:race_id/results", get(get_race_results))
}
