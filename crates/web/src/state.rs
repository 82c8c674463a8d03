use storage::Dataset;

use crate::features::search::debounce::Debouncer;

/// Shared handler state: the immutable dataset plus the search debouncer.
#[derive(Clone)]
pub struct AppState {
    pub data: Dataset,
    pub search_debounce: Debouncer,
}

impl AppState {
    pub fn new(data: Dataset) -> Self {
        Self {
            data,
            search_debounce: Debouncer::default(),
        }
    }
}
