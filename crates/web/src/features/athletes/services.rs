use chrono::{DateTime, Utc};
use storage::Dataset;
use storage::dto::athlete::{AthleteDetail, Competitor};
use storage::dto::stats::HistoricalData;
use storage::models::Season;
use storage::repository::athletes::CompetitorRepository;
use storage::services::historical;

/// Season roster, ascending by rank
pub fn list_competitors(data: &Dataset, season: Season) -> Vec<Competitor> {
    CompetitorRepository::new(data).list_by_season(season)
}

/// Detail view; synthesized for unknown athletes
pub fn competitor_details(data: &Dataset, athlete_id: &str) -> AthleteDetail {
    CompetitorRepository::new(data).details(athlete_id)
}

/// Historical projection over a lookback window
pub fn historical_stats(
    data: &Dataset,
    athlete_id: &str,
    years: u32,
    now: DateTime<Utc>,
) -> HistoricalData {
    historical::project_at(data, athlete_id, years, now)
}
