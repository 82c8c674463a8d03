use storage::Dataset;
use storage::dto::search::SearchHit;
use storage::models::Season;
use storage::services::search;

/// Cross-entity search over one season's collections
pub fn search_entities(data: &Dataset, season: Season, query: &str) -> Vec<SearchHit> {
    search::search(data, season, query)
}
