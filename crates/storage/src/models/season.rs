use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// World Cup season. Acts as the partition key for races and standings;
/// every season-scoped query takes one of these explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Season {
    #[serde(rename = "2024/2025")]
    S2024_25,
    #[serde(rename = "2025/2026")]
    S2025_26,
}

impl Season {
    pub const ALL: [Season; 2] = [Season::S2024_25, Season::S2025_26];

    /// Parses a season token. Unrecognized tokens yield `None` so callers
    /// can fail soft with empty collections instead of an error.
    pub fn parse(token: &str) -> Option<Season> {
        match token.trim() {
            "2024/2025" => Some(Season::S2024_25),
            "2025/2026" => Some(Season::S2025_26),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::S2024_25 => "2024/2025",
            Season::S2025_26 => "2025/2026",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_tokens() {
        assert_eq!(Season::parse("2024/2025"), Some(Season::S2024_25));
        assert_eq!(Season::parse(" 2025/2026 "), Some(Season::S2025_26));
    }

    #[test]
    fn parse_unknown_token_is_none() {
        assert_eq!(Season::parse("2019/2020"), None);
        assert_eq!(Season::parse(""), None);
    }

    #[test]
    fn label_round_trips_through_parse() {
        for season in Season::ALL {
            assert_eq!(Season::parse(season.label()), Some(season));
        }
    }
}
