use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Athlete,
    Location,
    Race,
}

/// One entry in the ranked, heterogeneous search result list. Short-lived:
/// produced for a single query, discarded on the next one.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchHit {
    pub id: String,
    pub kind: SearchKind,
    pub name: String,
    pub subtitle: String,
    /// Client-side navigation target.
    pub path: String,
}

/// Per-category result caps, applied before categories merge so no single
/// category can starve the others.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    pub athletes: usize,
    pub locations: usize,
    pub races: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            athletes: 5,
            locations: 3,
            races: 3,
        }
    }
}

impl SearchLimits {
    pub fn total(&self) -> usize {
        self.athletes + self.locations + self.races
    }
}
