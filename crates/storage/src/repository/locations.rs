use crate::dataset::Dataset;
use crate::models::Location;

pub struct LocationRepository<'a> {
    data: &'a Dataset,
}

impl<'a> LocationRepository<'a> {
    pub fn new(data: &'a Dataset) -> Self {
        Self { data }
    }

    /// All known venues. Season-independent: venues persist across seasons.
    pub fn list(&self) -> Vec<Location> {
        self.data.locations().to_vec()
    }

    pub fn find(&self, location_id: &str) -> Option<Location> {
        self.data
            .locations()
            .iter()
            .find(|l| l.id == location_id)
            .cloned()
    }
}
