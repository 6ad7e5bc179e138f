use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The six tournament phases a team's run can end at, from group stage
/// elimination up to winning the cup. Wire names are the Spanish stage
/// names used throughout the product and the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "grupos")]
    Groups,
    #[serde(rename = "octavos")]
    RoundOf16,
    #[serde(rename = "cuartos")]
    QuarterFinals,
    #[serde(rename = "semifinal")]
    SemiFinals,
    #[serde(rename = "final")]
    Final,
    #[serde(rename = "campeon")]
    Champion,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Groups,
        Stage::RoundOf16,
        Stage::QuarterFinals,
        Stage::SemiFinals,
        Stage::Final,
        Stage::Champion,
    ];

    /// The Spanish wire name for this stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Groups => "grupos",
            Stage::RoundOf16 => "octavos",
            Stage::QuarterFinals => "cuartos",
            Stage::SemiFinals => "semifinal",
            Stage::Final => "final",
            Stage::Champion => "campeon",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for stage names outside the closed six-value set. Predictions are
/// validated at the boundary where they are accepted so the scoring
/// functions can take `Stage` values and stay total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStage(pub String);

impl std::fmt::Display for UnknownStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown stage name: {:?}", self.0)
    }
}

impl std::error::Error for UnknownStage {}

impl FromStr for Stage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grupos" => Ok(Stage::Groups),
            "octavos" => Ok(Stage::RoundOf16),
            "cuartos" => Ok(Stage::QuarterFinals),
            "semifinal" => Ok(Stage::SemiFinals),
            "final" => Ok(Stage::Final),
            "campeon" => Ok(Stage::Champion),
            other => Err(UnknownStage(other.to_string())),
        }
    }
}
