use rand::Rng;
use rand::rngs::StdRng;

use crate::models::{Race, RaceResult, Standing};
use crate::rng::rng_for;

/// Points by finishing rank, top ten. Fixed non-increasing schedule.
fn points_for(rank: u32) -> u32 {
    100 - (rank - 1) * 10
}

/// Synthesizes a plausible result sheet for a completed race that has none
/// stored, by running the standings order down the hill. Seeded by the race
/// id: the same race always produces the same sheet.
pub fn synthesize(race: &Race, standings: &[Standing]) -> Vec<RaceResult> {
    let mut rng = rng_for(&race.id);

    standings
        .iter()
        .take(10)
        .enumerate()
        .map(|(index, standing)| {
            let rank = index as u32 + 1;
            RaceResult {
                race_id: race.id.clone(),
                rank,
                athlete_id: standing.athlete_id.clone(),
                name: standing.name.clone(),
                country: standing.country.clone(),
                time: race_time(&mut rng),
                gap: if rank == 1 {
                    String::new()
                } else {
                    format!("+{:.2}", rng.gen_range(0.0..2.0f64))
                },
                points: points_for(rank),
                run1: Some(run_time(&mut rng)),
                run2: Some(run_time(&mut rng)),
            }
        })
        .collect()
}

fn race_time(rng: &mut StdRng) -> String {
    format!("2:0{}.{:02}", rng.gen_range(1..=5), rng.gen_range(0..100))
}

fn run_time(rng: &mut StdRng) -> String {
    format!("1:0{}.{:02}", rng.gen_range(1..=5), rng.gen_range(0..100))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::{Discipline, RaceStatus, Season};

    fn race(id: &str) -> Race {
        Race {
            id: id.to_string(),
            name: "Lauberhorn Downhill".to_string(),
            location_id: "wengen".to_string(),
            location: "Wengen".to_string(),
            country: "Switzerland".to_string(),
            country_code: "SUI".to_string(),
            date: "2025-01-18".parse().unwrap(),
            discipline: Discipline::Downhill,
            season: Season::S2024_25,
            status: RaceStatus::Completed,
        }
    }

    fn standings(n: u32) -> Vec<Standing> {
        (1..=n)
            .map(|rank| Standing {
                rank,
                athlete_id: format!("athlete-{rank}"),
                name: format!("Athlete {rank}"),
                country: "Austria".to_string(),
                country_code: "AUT".to_string(),
                points: 1000 - rank * 10,
                discipline_ranks: BTreeMap::new(),
            })
            .collect()
    }

    #[test]
    fn sheet_is_deterministic_per_race() {
        let race = race("wengen-2025-1");
        let a = synthesize(&race, &standings(12));
        let b = synthesize(&race, &standings(12));
        assert_eq!(a.len(), 10);
        assert_eq!(a[3].time, b[3].time);
        assert_eq!(a[3].gap, b[3].gap);
    }

    #[test]
    fn different_races_get_different_sheets() {
        let a = synthesize(&race("wengen-2025-1"), &standings(10));
        let b = synthesize(&race("kitzbuehel-2025-1"), &standings(10));
        assert_ne!(
            a.iter().map(|r| &r.time).collect::<Vec<_>>(),
            b.iter().map(|r| &r.time).collect::<Vec<_>>()
        );
    }

    #[test]
    fn winner_has_empty_gap_and_points_follow_schedule() {
        let results = synthesize(&race("wengen-2025-1"), &standings(10));
        assert_eq!(results[0].rank, 1);
        assert!(results[0].gap.is_empty());
        assert!(results.iter().skip(1).all(|r| r.gap.starts_with('+')));
        let points: Vec<u32> = results.iter().map(|r| r.points).collect();
        assert_eq!(points, vec![100, 90, 80, 70, 60, 50, 40, 30, 20, 10]);
    }

    #[test]
    fn short_standings_produce_short_sheets() {
        let results = synthesize(&race("wengen-2025-1"), &standings(4));
        assert_eq!(results.len(), 4);
    }
}
