use storage::Dataset;
use storage::models::Location;
use storage::repository::locations::LocationRepository;

/// List all venues
pub fn list_locations(data: &Dataset) -> Vec<Location> {
    LocationRepository::new(data).list()
}
