use storage::models::Season;

pub mod athletes;
pub mod locations;
pub mod races;
pub mod search;

/// Current season served when a request names none.
pub const DEFAULT_SEASON: Season = Season::S2025_26;

/// Resolves the optional `season` query parameter. Missing means the current
/// season; an unrecognized token means "no data" (the caller answers with an
/// empty collection rather than an error).
pub(crate) fn resolve_season(param: Option<&str>) -> Option<Season> {
    match param {
        None => Some(DEFAULT_SEASON),
        Some(token) => {
            let season = Season::parse(token);
            if season.is_none() {
                tracing::debug!(token, "unrecognized season token");
            }
            season
        }
    }
}
