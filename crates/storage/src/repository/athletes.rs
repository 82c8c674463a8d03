use rand::Rng;

use crate::dataset::Dataset;
use crate::dto::athlete::{AthleteDetail, Competitor, CurrentSeasonStats};
use crate::models::{Discipline, RaceStatus, Season, Standing};
use crate::rng::rng_for;
use crate::services::photos;

pub struct CompetitorRepository<'a> {
    data: &'a Dataset,
}

impl<'a> CompetitorRepository<'a> {
    pub fn new(data: &'a Dataset) -> Self {
        Self { data }
    }

    /// Season roster: standings joined with athlete biographies, ascending by
    /// rank. Standings without a biography (earlier seasons ship standings
    /// only) get neutral bio defaults rather than being dropped.
    pub fn list_by_season(&self, season: Season) -> Vec<Competitor> {
        self.data
            .standings(season)
            .iter()
            .map(|standing| self.join_standing(standing))
            .collect()
    }

    fn join_standing(&self, standing: &Standing) -> Competitor {
        let bio = self.data.athlete_bio(&standing.athlete_id);
        Competitor {
            id: standing.athlete_id.clone(),
            name: standing.name.clone(),
            country: standing.country.clone(),
            country_code: standing.country_code.clone(),
            age: bio.map(|b| b.age).unwrap_or(25),
            disciplines: bio
                .map(|b| b.disciplines.clone())
                .unwrap_or_else(|| vec![Discipline::GiantSlalom]),
            world_cup_points: standing.points,
            rank: standing.rank,
            discipline_ranks: standing.discipline_ranks.clone(),
            image: photos::athlete_photo(&standing.athlete_id, &standing.country_code),
        }
    }

    /// Extended view for the detail page. Total: unknown athletes yield a
    /// record synthesized from the id string, flagged `synthesized`, so the
    /// caller always has something to render.
    pub fn details(&self, athlete_id: &str) -> AthleteDetail {
        let standing = self.latest_standing(athlete_id);
        let bio = self.data.athlete_bio(athlete_id);

        match (bio, standing) {
            (Some(bio), standing) => {
                let rank = standing.map(|(_, s)| s.rank).unwrap_or(u32::MAX);
                let points = standing.map(|(_, s)| s.points).unwrap_or(0);
                let season = standing.map(|(season, _)| season);
                // Career trophy counters are demo figures, seeded by the
                // athlete id so repeated requests agree.
                let mut rng = rng_for(athlete_id);
                AthleteDetail {
                    id: bio.id.clone(),
                    name: bio.name.clone(),
                    country: bio.country.clone(),
                    age: bio.age,
                    disciplines: bio.disciplines.clone(),
                    height: bio.height.clone().unwrap_or_else(|| "Unknown".to_string()),
                    weight: bio.weight.clone().unwrap_or_else(|| "Unknown".to_string()),
                    birth_date: bio
                        .birth_date
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    birth_place: bio
                        .birth_place
                        .clone()
                        .unwrap_or_else(|| "Unknown".to_string()),
                    world_cup_debut: bio
                        .world_cup_debut
                        .clone()
                        .unwrap_or_else(|| "2018".to_string()),
                    world_cup_wins: if rank <= 3 {
                        rng.gen_range(5..15)
                    } else {
                        rng.gen_range(0..5)
                    },
                    olympic_medals: if rank <= 5 { rng.gen_range(0..3) } else { 0 },
                    world_championships: if rank <= 5 { rng.gen_range(0..3) } else { 0 },
                    image: photos::athlete_photo(athlete_id, &bio.country_code),
                    current_season_stats: self.current_season_stats(season, rank, points),
                    synthesized: false,
                }
            }
            (None, Some((season, s))) => {
                let standing = s.clone();
                tracing::debug!(athlete_id, "no biography on file, building detail from standing");
                AthleteDetail {
                    id: standing.athlete_id.clone(),
                    name: standing.name.clone(),
                    country: standing.country.clone(),
                    age: 25,
                    disciplines: vec![Discipline::GiantSlalom],
                    height: "Unknown".to_string(),
                    weight: "Unknown".to_string(),
                    birth_date: "Unknown".to_string(),
                    birth_place: "Unknown".to_string(),
                    world_cup_debut: "Unknown".to_string(),
                    world_cup_wins: 0,
                    olympic_medals: 0,
                    world_championships: 0,
                    image: photos::athlete_photo(&standing.athlete_id, &standing.country_code),
                    current_season_stats: self.current_season_stats(
                        Some(season),
                        standing.rank,
                        standing.points,
                    ),
                    synthesized: false,
                }
            }
            (None, None) => {
                tracing::debug!(athlete_id, "athlete not in reference data, synthesizing detail");
                AthleteDetail {
                    id: athlete_id.to_string(),
                    name: name_from_id(athlete_id),
                    country: "Unknown".to_string(),
                    age: 25,
                    disciplines: vec![Discipline::GiantSlalom],
                    height: "180cm".to_string(),
                    weight: "80kg".to_string(),
                    birth_date: "1995-01-01".to_string(),
                    birth_place: "Unknown".to_string(),
                    world_cup_debut: "2018".to_string(),
                    world_cup_wins: 0,
                    olympic_medals: 0,
                    world_championships: 0,
                    image: photos::athlete_photo(athlete_id, ""),
                    current_season_stats: CurrentSeasonStats {
                        races: 0,
                        wins: 0,
                        podiums: 0,
                        points: 0,
                    },
                    synthesized: true,
                }
            }
        }
    }

    /// The athlete's standing in the most recent season that has one.
    fn latest_standing(&self, athlete_id: &str) -> Option<(Season, &Standing)> {
        Season::ALL.iter().rev().find_map(|&season| {
            self.data
                .standings(season)
                .iter()
                .find(|s| s.athlete_id == athlete_id)
                .map(|s| (season, s))
        })
    }

    fn current_season_stats(
        &self,
        season: Option<Season>,
        rank: u32,
        points: u32,
    ) -> CurrentSeasonStats {
        let races = season
            .map(|season| {
                self.data
                    .races()
                    .iter()
                    .filter(|r| r.season == season && r.status == RaceStatus::Completed)
                    .count() as u32
            })
            .unwrap_or(0);
        CurrentSeasonStats {
            races,
            wins: match rank {
                1 => 5,
                2..=3 => 2,
                _ => 1,
            },
            podiums: match rank {
                1..=5 => 8,
                6..=10 => 4,
                _ => 1,
            },
            points,
        }
    }
}

/// "odermatt-marco" becomes "Odermatt Marco". Used when an id has no backing
/// record but the UI still needs a display name.
fn name_from_id(athlete_id: &str) -> String {
    athlete_id
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
