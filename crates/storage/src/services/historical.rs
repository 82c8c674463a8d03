use chrono::{DateTime, Datelike, Utc};

use crate::dataset::Dataset;
use crate::dto::stats::{HistoricalData, HistoricalStats, StatsBasis};
use crate::models::{CareerStats, DisciplineStats};

/// Years of history covered by the stored career records. Projections scale
/// counters by `requested_years / BASE_WINDOW_YEARS`.
pub const BASE_WINDOW_YEARS: u32 = 5;

fn scale(count: u32, years: u32) -> u32 {
    (f64::from(count) * f64::from(years) / f64::from(BASE_WINDOW_YEARS)).round() as u32
}

/// Historical projection for an athlete over a lookback window.
///
/// Count fields scale linearly with the window and round to nearest, so the
/// projection is monotonic in `years` and never negative. Rate-like fields
/// (`average_points`, `best_season`) pass through unchanged. An athlete with
/// no recorded career gets a zero-filled record marked `StatsBasis::Default`;
/// the marker, not the zeros, is the "unknown athlete" signal.
pub fn project(data: &Dataset, athlete_id: &str, years: u32) -> HistoricalData {
    project_at(data, athlete_id, years, Utc::now())
}

/// Same as [`project`] with an explicit clock, for deterministic tests.
pub fn project_at(
    data: &Dataset,
    athlete_id: &str,
    years: u32,
    now: DateTime<Utc>,
) -> HistoricalData {
    let (base, basis) = match data.career_stats(athlete_id) {
        Some(career) => (career.clone(), StatsBasis::Recorded),
        None => {
            tracing::debug!(athlete_id, "no career record, projecting from empty base");
            (CareerStats::empty(athlete_id), StatsBasis::Default)
        }
    };

    let stats = HistoricalStats {
        total_races: scale(base.total_races, years),
        wins: scale(base.wins, years),
        podiums: scale(base.podiums, years),
        average_points: base.average_points,
        best_season: base.best_season,
        discipline_breakdown: base
            .discipline_breakdown
            .iter()
            .map(|(discipline, counters)| {
                (
                    *discipline,
                    DisciplineStats {
                        races: scale(counters.races, years),
                        wins: scale(counters.wins, years),
                        podiums: scale(counters.podiums, years),
                    },
                )
            })
            .collect(),
    };

    HistoricalData {
        competitor_id: athlete_id.to_string(),
        period: format!("{}-{}", now.year() - years as i32, now.year()),
        stats,
        basis,
        last_updated: now,
    }
}
