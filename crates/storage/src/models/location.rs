use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Discipline;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A named course on a venue's mountain, e.g. the Lauberhorn or the Streif.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub name: String,
    pub discipline: Discipline,
    /// Course length in metres.
    pub length: Option<u32>,
    pub vertical_drop: Option<u32>,
}

/// A World Cup venue. Locations persist across seasons; only the races held
/// there vary, so this record carries no season field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub country: String,
    pub country_code: String,
    /// Base elevation in metres.
    pub elevation: u32,
    pub coordinates: Coordinates,
    pub description: String,
    #[serde(default)]
    pub courses: Vec<Course>,
}
