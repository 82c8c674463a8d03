pub mod athlete;
pub mod search;
pub mod stats;
