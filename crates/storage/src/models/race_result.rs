use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One athlete's result in one race, ordered by `rank` within the race.
/// Times are display strings, not durations; rank 1 carries an empty gap.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RaceResult {
    pub race_id: String,
    pub rank: u32,
    pub athlete_id: String,
    pub name: String,
    pub country: String,
    pub time: String,
    pub gap: String,
    pub points: u32,
    pub run1: Option<String>,
    pub run2: Option<String>,
}
