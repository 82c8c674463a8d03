use crate::dataset::Dataset;
use crate::dto::athlete::Competitor;
use crate::dto::search::{SearchHit, SearchKind, SearchLimits};
use crate::models::{Location, Race, Season};
use crate::repository::athletes::CompetitorRepository;
use crate::repository::locations::LocationRepository;
use crate::repository::races::RaceRepository;

/// Collections the search index scans. A trait seam so tests can verify the
/// empty-query short-circuit never touches the data.
pub trait SearchSource {
    fn competitors(&self, season: Season) -> Vec<Competitor>;
    fn locations(&self) -> Vec<Location>;
    fn races(&self, season: Season) -> Vec<Race>;
}

impl SearchSource for Dataset {
    fn competitors(&self, season: Season) -> Vec<Competitor> {
        CompetitorRepository::new(self).list_by_season(season)
    }

    fn locations(&self) -> Vec<Location> {
        LocationRepository::new(self).list()
    }

    fn races(&self, season: Season) -> Vec<Race> {
        RaceRepository::new(self).list_by_season(season)
    }
}

pub fn search(source: &impl SearchSource, season: Season, query: &str) -> Vec<SearchHit> {
    search_with_limits(source, season, query, SearchLimits::default())
}

/// Case-insensitive substring search across athletes, locations and races.
///
/// Each category is capped independently before the lists merge, so a broad
/// query cannot let one category starve the others. Category order is fixed
/// (athletes, locations, races); ties keep source order. The categories are
/// scanned independently of each other: nothing a single category does can
/// suppress the results of the remaining two.
pub fn search_with_limits(
    source: &impl SearchSource,
    season: Season,
    query: &str,
    limits: SearchLimits,
) -> Vec<SearchHit> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut hits = Vec::with_capacity(limits.total());

    hits.extend(
        source
            .competitors(season)
            .into_iter()
            .filter(|a| contains(&a.name, &needle) || contains(&a.country, &needle))
            .take(limits.athletes)
            .map(|a| SearchHit {
                id: a.id.clone(),
                kind: SearchKind::Athlete,
                name: a.name,
                subtitle: format!("{} • Rank #{}", a.country, a.rank),
                path: format!("/athletes/{}", a.id),
            }),
    );

    hits.extend(
        source
            .locations()
            .into_iter()
            .filter(|l| contains(&l.name, &needle) || contains(&l.country, &needle))
            .take(limits.locations)
            .map(|l| SearchHit {
                id: l.id,
                kind: SearchKind::Location,
                name: l.name,
                subtitle: l.country,
                path: "/locations".to_string(),
            }),
    );

    hits.extend(
        source
            .races(season)
            .into_iter()
            .filter(|r| contains(&r.name, &needle) || contains(&r.location, &needle))
            .take(limits.races)
            .map(|r| SearchHit {
                id: r.id,
                kind: SearchKind::Race,
                name: r.name,
                subtitle: format!("{} • {}", r.location, r.date.format("%b %d, %Y")),
                path: "/races".to_string(),
            }),
    );

    hits
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::{Coordinates, Discipline, RaceStatus};

    struct FakeSource {
        athletes: Vec<Competitor>,
        locations: Vec<Location>,
        races: Vec<Race>,
        calls: Cell<usize>,
    }

    impl FakeSource {
        fn empty() -> Self {
            Self {
                athletes: Vec::new(),
                locations: Vec::new(),
                races: Vec::new(),
                calls: Cell::new(0),
            }
        }
    }

    impl SearchSource for FakeSource {
        fn competitors(&self, _season: Season) -> Vec<Competitor> {
            self.calls.set(self.calls.get() + 1);
            self.athletes.clone()
        }

        fn locations(&self) -> Vec<Location> {
            self.calls.set(self.calls.get() + 1);
            self.locations.clone()
        }

        fn races(&self, _season: Season) -> Vec<Race> {
            self.calls.set(self.calls.get() + 1);
            self.races.clone()
        }
    }

    fn athlete(id: &str, name: &str, country: &str, rank: u32) -> Competitor {
        Competitor {
            id: id.to_string(),
            name: name.to_string(),
            country: country.to_string(),
            country_code: "SUI".to_string(),
            age: 27,
            disciplines: vec![Discipline::GiantSlalom],
            world_cup_points: 1000,
            rank,
            discipline_ranks: BTreeMap::new(),
            image: String::new(),
        }
    }

    fn location(id: &str, name: &str, country: &str) -> Location {
        Location {
            id: id.to_string(),
            name: name.to_string(),
            country: country.to_string(),
            country_code: "SUI".to_string(),
            elevation: 1274,
            coordinates: Coordinates { lat: 46.6, lng: 7.9 },
            description: String::new(),
            courses: Vec::new(),
        }
    }

    fn race(id: &str, name: &str, location: &str) -> Race {
        Race {
            id: id.to_string(),
            name: name.to_string(),
            location_id: location.to_lowercase(),
            location: location.to_string(),
            country: "Switzerland".to_string(),
            country_code: "SUI".to_string(),
            date: "2025-01-18".parse().unwrap(),
            discipline: Discipline::Downhill,
            season: Season::S2024_25,
            status: RaceStatus::Completed,
        }
    }

    fn populated() -> FakeSource {
        FakeSource {
            athletes: vec![
                athlete("odermatt-marco", "Marco Odermatt", "Switzerland", 1),
                athlete("kristoffersen-henrik", "Henrik Kristoffersen", "Norway", 2),
            ],
            locations: vec![
                location("wengen", "Wengen", "Switzerland"),
                location("kitzbuehel", "Kitzbühel", "Austria"),
            ],
            races: vec![
                race("wengen-2025-1", "Lauberhorn Downhill", "Wengen"),
                race("kitzbuehel-2025-1", "Hahnenkamm Downhill", "Kitzbühel"),
            ],
            calls: Cell::new(0),
        }
    }

    #[test]
    fn empty_query_short_circuits_without_scanning() {
        let source = FakeSource::empty();
        assert!(search(&source, Season::S2024_25, "").is_empty());
        assert!(search(&source, Season::S2024_25, "   ").is_empty());
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn finds_athlete_by_name_with_country_and_rank_subtitle() {
        let source = populated();
        let hits = search(&source, Season::S2024_25, "Odermatt");
        let athlete_hits: Vec<_> = hits
            .iter()
            .filter(|h| h.kind == SearchKind::Athlete)
            .collect();
        assert_eq!(athlete_hits.len(), 1);
        assert_eq!(athlete_hits[0].name, "Marco Odermatt");
        assert_eq!(athlete_hits[0].subtitle, "Switzerland • Rank #1");
        assert_eq!(athlete_hits[0].path, "/athletes/odermatt-marco");
    }

    #[test]
    fn matching_is_case_insensitive_and_covers_country() {
        let source = populated();
        let hits = search(&source, Season::S2024_25, "norway");
        assert!(
            hits.iter()
                .any(|h| h.kind == SearchKind::Athlete && h.name == "Henrik Kristoffersen")
        );
    }

    #[test]
    fn categories_come_back_in_fixed_order() {
        let source = populated();
        // Matches one location and one race, no athletes.
        let hits = search(&source, Season::S2024_25, "Wengen");
        let kinds: Vec<SearchKind> = hits.iter().map(|h| h.kind).collect();
        assert_eq!(kinds, vec![SearchKind::Location, SearchKind::Race]);
        assert!(hits[1].subtitle.starts_with("Wengen • "));
    }

    #[test]
    fn per_category_caps_bound_the_result_list() {
        let mut source = FakeSource::empty();
        for i in 0..20 {
            source
                .athletes
                .push(athlete(&format!("a{i}"), "Common Name", "Switzerland", i + 1));
            source
                .locations
                .push(location(&format!("l{i}"), "Common Name", "Switzerland"));
            source
                .races
                .push(race(&format!("r{i}"), "Common Name", "Common Name"));
        }
        let hits = search(&source, Season::S2024_25, "common");
        assert_eq!(hits.len(), 11);
        let count = |kind: SearchKind| hits.iter().filter(|h| h.kind == kind).count();
        assert_eq!(count(SearchKind::Athlete), 5);
        assert_eq!(count(SearchKind::Location), 3);
        assert_eq!(count(SearchKind::Race), 3);
    }

    #[test]
    fn ties_keep_source_order() {
        let source = populated();
        let hits = search(&source, Season::S2024_25, "downhill");
        let race_names: Vec<&str> = hits
            .iter()
            .filter(|h| h.kind == SearchKind::Race)
            .map(|h| h.name.as_str())
            .collect();
        assert_eq!(race_names, vec!["Lauberhorn Downhill", "Hahnenkamm Downhill"]);
    }
}
