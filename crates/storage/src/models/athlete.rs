use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Discipline;

/// Season-independent biographical data for an athlete. Standings carry the
/// per-season points and ranks; this record carries everything else.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteBio {
    pub id: String,
    pub name: String,
    pub country: String,
    pub country_code: String,
    pub age: u32,
    pub disciplines: Vec<Discipline>,
    pub birth_date: Option<NaiveDate>,
    pub birth_place: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub world_cup_debut: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct DisciplineRank {
    pub rank: u32,
    pub points: u32,
}

/// An athlete's entry in one season's World Cup standings. Ranks are 1-based
/// and dense within a season.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Standing {
    pub rank: u32,
    pub athlete_id: String,
    pub name: String,
    pub country: String,
    pub country_code: String,
    pub points: u32,
    #[serde(default)]
    pub discipline_ranks: BTreeMap<Discipline, DisciplineRank>,
}
