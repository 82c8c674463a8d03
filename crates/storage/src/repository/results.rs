use crate::dataset::Dataset;
use crate::models::{RaceResult, RaceStatus};
use crate::services::result_gen;

pub struct ResultRepository<'a> {
    data: &'a Dataset,
}

impl<'a> ResultRepository<'a> {
    pub fn new(data: &'a Dataset) -> Self {
        Self { data }
    }

    /// Results for one race, ascending by rank. Empty for unknown races and
    /// for races that have not run yet. Completed races without a stored
    /// sheet get a synthesized one (deterministic per race id).
    pub fn for_race(&self, race_id: &str) -> Vec<RaceResult> {
        let stored = self.data.stored_results(race_id);
        if !stored.is_empty() {
            return stored.to_vec();
        }

        match self.data.race(race_id) {
            Some(race) if race.status == RaceStatus::Completed => {
                tracing::debug!(race_id, "no stored results, synthesizing sheet");
                result_gen::synthesize(race, self.data.standings(race.season))
            }
            Some(_) => Vec::new(),
            None => {
                tracing::debug!(race_id, "results requested for unknown race");
                Vec::new()
            }
        }
    }
}
