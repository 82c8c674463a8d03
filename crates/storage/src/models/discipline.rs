use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Alpine skiing race category. Serialized with the FIS two/three letter
/// codes used throughout the calendar data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum Discipline {
    #[serde(rename = "DH")]
    Downhill,
    #[serde(rename = "SG")]
    SuperG,
    #[serde(rename = "GS")]
    GiantSlalom,
    #[serde(rename = "SL")]
    Slalom,
    #[serde(rename = "AC")]
    AlpineCombined,
    #[serde(rename = "PAR")]
    Parallel,
}

impl Discipline {
    pub fn from_code(code: &str) -> Option<Discipline> {
        match code {
            "DH" => Some(Discipline::Downhill),
            "SG" => Some(Discipline::SuperG),
            "GS" => Some(Discipline::GiantSlalom),
            "SL" => Some(Discipline::Slalom),
            "AC" => Some(Discipline::AlpineCombined),
            "PAR" => Some(Discipline::Parallel),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Discipline::Downhill => "DH",
            Discipline::SuperG => "SG",
            Discipline::GiantSlalom => "GS",
            Discipline::Slalom => "SL",
            Discipline::AlpineCombined => "AC",
            Discipline::Parallel => "PAR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Discipline::Downhill => "Downhill",
            Discipline::SuperG => "Super G",
            Discipline::GiantSlalom => "Giant Slalom",
            Discipline::Slalom => "Slalom",
            Discipline::AlpineCombined => "Alpine Combined",
            Discipline::Parallel => "Parallel",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips() {
        for d in [
            Discipline::Downhill,
            Discipline::SuperG,
            Discipline::GiantSlalom,
            Discipline::Slalom,
            Discipline::AlpineCombined,
            Discipline::Parallel,
        ] {
            assert_eq!(Discipline::from_code(d.code()), Some(d));
        }
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(Discipline::from_code("XX"), None);
    }
}
