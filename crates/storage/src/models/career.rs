use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Discipline;

/// Per-discipline race counters. `podiums` includes `wins`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema)]
pub struct DisciplineStats {
    pub races: u32,
    pub wins: u32,
    pub podiums: u32,
}

/// An athlete's career counters over the base lookback window
/// (see `services::historical::BASE_WINDOW_YEARS`). The statistics engine
/// scales these to other windows; it never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CareerStats {
    pub athlete_id: String,
    pub total_races: u32,
    pub wins: u32,
    pub podiums: u32,
    pub average_points: f64,
    /// Label of the athlete's strongest season, e.g. "2023/2024". Kept as a
    /// free string since best seasons predate the seasons served live.
    pub best_season: String,
    pub discipline_breakdown: BTreeMap<Discipline, DisciplineStats>,
}

impl CareerStats {
    /// Zero-filled record used when an athlete has no recorded career data.
    /// Callers must pair this with an explicit basis marker; zeros alone are
    /// not a "not found" signal.
    pub fn empty(athlete_id: &str) -> Self {
        Self {
            athlete_id: athlete_id.to_string(),
            total_races: 0,
            wins: 0,
            podiums: 0,
            average_points: 0.0,
            best_season: String::new(),
            discipline_breakdown: BTreeMap::new(),
        }
    }
}
