mod athlete;
mod career;
pub mod country;
mod discipline;
mod location;
mod race;
mod race_result;
mod season;

pub use athlete::{AthleteBio, DisciplineRank, Standing};
pub use career::{CareerStats, DisciplineStats};
pub use discipline::Discipline;
pub use location::{Coordinates, Course, Location};
pub use race::{Race, RaceStatus};
pub use race_result::RaceResult;
pub use season::Season;
