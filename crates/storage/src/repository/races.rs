use chrono::NaiveDate;

use crate::dataset::Dataset;
use crate::models::{Race, Season};

/// Which side of `today` a race list should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceWindow {
    Upcoming,
    Past,
}

pub struct RaceRepository<'a> {
    data: &'a Dataset,
}

impl<'a> RaceRepository<'a> {
    pub fn new(data: &'a Dataset) -> Self {
        Self { data }
    }

    /// Races of one season, in source order. Empty for a season with no data.
    pub fn list_by_season(&self, season: Season) -> Vec<Race> {
        self.data
            .races()
            .iter()
            .filter(|r| r.season == season)
            .cloned()
            .collect()
    }

    /// Season races on one side of `today`. The race date is authoritative
    /// for the classification; `today` is passed in so callers decide what
    /// "now" means (and tests stay deterministic).
    pub fn list_by_window(&self, season: Season, window: RaceWindow, today: NaiveDate) -> Vec<Race> {
        self.list_by_season(season)
            .into_iter()
            .filter(|r| match window {
                RaceWindow::Upcoming => r.date >= today,
                RaceWindow::Past => r.date < today,
            })
            .collect()
    }

    pub fn find(&self, race_id: &str) -> Option<Race> {
        self.data.race(race_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Seed;
    use crate::models::{Discipline, RaceStatus};

    fn race(id: &str, season: Season, date: &str) -> Race {
        Race {
            id: id.to_string(),
            name: format!("Race {id}"),
            location_id: "wengen".to_string(),
            location: "Wengen".to_string(),
            country: "Switzerland".to_string(),
            country_code: "SUI".to_string(),
            date: date.parse().unwrap(),
            discipline: Discipline::Downhill,
            season,
            status: RaceStatus::Scheduled,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_seed(Seed {
            races: vec![
                race("a", Season::S2024_25, "2025-01-18"),
                race("b", Season::S2025_26, "2026-01-17"),
                race("c", Season::S2024_25, "2025-01-25"),
            ],
            ..Seed::default()
        })
    }

    #[test]
    fn list_by_season_returns_only_that_season() {
        let data = dataset();
        let races = RaceRepository::new(&data).list_by_season(Season::S2024_25);
        assert_eq!(races.len(), 2);
        assert!(races.iter().all(|r| r.season == Season::S2024_25));
    }

    #[test]
    fn window_split_uses_race_date() {
        let data = dataset();
        let repo = RaceRepository::new(&data);
        let today: NaiveDate = "2025-01-20".parse().unwrap();

        let upcoming = repo.list_by_window(Season::S2024_25, RaceWindow::Upcoming, today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, "c");

        let past = repo.list_by_window(Season::S2024_25, RaceWindow::Past, today);
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].id, "a");
    }
}
