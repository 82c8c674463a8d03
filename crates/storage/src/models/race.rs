use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Discipline, Season};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RaceStatus {
    Scheduled,
    Live,
    Completed,
    Cancelled,
}

/// A single World Cup race. The `date` field is authoritative for
/// chronological ordering and upcoming/past classification; `status` is
/// static reference data and is never transitioned in process.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Race {
    pub id: String,
    pub name: String,
    pub location_id: String,
    pub location: String,
    pub country: String,
    pub country_code: String,
    pub date: NaiveDate,
    pub discipline: Discipline,
    pub season: Season,
    pub status: RaceStatus,
}
