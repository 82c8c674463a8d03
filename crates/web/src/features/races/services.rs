use chrono::NaiveDate;
use storage::Dataset;
use storage::models::{Race, RaceResult, Season};
use storage::repository::races::{RaceRepository, RaceWindow};
use storage::repository::results::ResultRepository;

/// List a season's races
pub fn list_races(data: &Dataset, season: Season) -> Vec<Race> {
    RaceRepository::new(data).list_by_season(season)
}

/// List a season's races on one side of `today`
pub fn list_races_in_window(
    data: &Dataset,
    season: Season,
    window: RaceWindow,
    today: NaiveDate,
) -> Vec<Race> {
    RaceRepository::new(data).list_by_window(season, window, today)
}

/// Results for one race, ascending by rank
pub fn race_results(data: &Dataset, race_id: &str) -> Vec<RaceResult> {
    ResultRepository::new(data).for_race(race_id)
}
