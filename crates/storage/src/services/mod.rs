pub mod historical;
pub mod photos;
pub mod result_gen;
pub mod search;
pub mod stats;
