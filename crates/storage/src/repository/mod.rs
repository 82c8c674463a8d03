pub mod athletes;
pub mod locations;
pub mod races;
pub mod results;
