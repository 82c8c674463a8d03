use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Discipline, DisciplineRank};

/// Display-ready roster entry: a season standing joined with the athlete's
/// biography. This is what list views render.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Competitor {
    pub id: String,
    pub name: String,
    pub country: String,
    pub country_code: String,
    pub age: u32,
    pub disciplines: Vec<Discipline>,
    pub world_cup_points: u32,
    pub rank: u32,
    pub discipline_ranks: BTreeMap<Discipline, DisciplineRank>,
    pub image: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct CurrentSeasonStats {
    pub races: u32,
    pub wins: u32,
    pub podiums: u32,
    pub points: u32,
}

/// Extended athlete view for the detail page. Always constructible: when the
/// athlete is unknown, the repository synthesizes a minimal record and sets
/// `synthesized` so consumers can distinguish it from real data.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteDetail {
    pub id: String,
    pub name: String,
    pub country: String,
    pub age: u32,
    pub disciplines: Vec<Discipline>,
    pub height: String,
    pub weight: String,
    pub birth_date: String,
    pub birth_place: String,
    pub world_cup_debut: String,
    pub world_cup_wins: u32,
    pub olympic_medals: u32,
    pub world_championships: u32,
    pub image: String,
    pub current_season_stats: CurrentSeasonStats,
    pub synthesized: bool,
}
