use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Discipline, DisciplineStats};

/// Rates derived from one discipline's counters. Rates are preformatted
/// one-decimal percentage strings ("30.0"), matching what the UI shows.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DisciplinePerformance {
    pub win_rate: String,
    pub podium_rate: String,
    /// Non-podium finishes. Negative only for malformed input, which is
    /// logged upstream rather than clamped here.
    pub other_results: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoricalStats {
    pub total_races: u32,
    pub wins: u32,
    pub podiums: u32,
    pub average_points: f64,
    pub best_season: String,
    pub discipline_breakdown: BTreeMap<Discipline, DisciplineStats>,
}

/// Where the numbers in a historical projection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatsBasis {
    /// Scaled from the athlete's recorded career window.
    Recorded,
    /// The athlete has no recorded career data; counters are zero-filled.
    Default,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoricalData {
    pub competitor_id: String,
    /// Calendar span covered by the projection, e.g. "2021-2026".
    pub period: String,
    pub stats: HistoricalStats,
    pub basis: StatsBasis,
    pub last_updated: DateTime<Utc>,
}
