use serde::{Deserialize, Serialize};

use crate::stage::Stage;

/// Points awarded per stage for a correct "how far does Colombia go"
/// prediction. One flat value per stage of the closed six-stage set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StagePoints {
    pub groups: u32,
    pub round_of_16: u32,
    pub quarter_finals: u32,
    pub semi_finals: u32,
    pub r#final: u32,
    pub champion: u32,
}

impl Default for StagePoints {
    fn default() -> Self {
        Self {
            groups: 2,
            round_of_16: 3,
            quarter_finals: 4,
            semi_finals: 5,
            r#final: 6,
            champion: 10,
        }
    }
}

impl StagePoints {
    pub fn for_stage(&self, stage: Stage) -> u32 {
        match stage {
            Stage::Groups => self.groups,
            Stage::RoundOf16 => self.round_of_16,
            Stage::QuarterFinals => self.quarter_finals,
            Stage::SemiFinals => self.semi_finals,
            Stage::Final => self.r#final,
            Stage::Champion => self.champion,
        }
    }
}

/// Percentage split of the prize pool across the four prize buckets.
/// The four values are expected to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrizeSplit {
    pub first_pct: f64,
    pub exact_pct: f64,
    pub groups_pct: f64,
    pub reserve_pct: f64,
}

impl Default for PrizeSplit {
    fn default() -> Self {
        Self {
            first_pct: 55.0,
            exact_pct: 25.0,
            groups_pct: 10.0,
            reserve_pct: 10.0,
        }
    }
}

impl PrizeSplit {
    pub fn sum(&self) -> f64 {
        self.first_pct + self.exact_pct + self.groups_pct + self.reserve_pct
    }
}

/// The full rule set governing all point and prize calculations. Read-only:
/// either the hardcoded defaults below or a row fetched from the
/// configuration store, never a partial merge of the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points for predicting the exact scoreline.
    pub exact_points: u32,
    /// Points for the right outcome (home win / draw / away win) with the
    /// wrong scoreline.
    pub outcome_points: u32,
    /// Points for everything else.
    pub miss_points: u32,
    pub champion_points: u32,
    pub runner_up_points: u32,
    pub top_scorer_points: u32,
    pub colombia: StagePoints,
    /// Entry fee per participant, in whole Colombian pesos.
    pub entry_fee: u64,
    pub prizes: PrizeSplit,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            exact_points: 3,
            outcome_points: 1,
            miss_points: 0,
            champion_points: 10,
            runner_up_points: 5,
            top_scorer_points: 5,
            colombia: StagePoints::default(),
            entry_fee: 100_000,
            prizes: PrizeSplit::default(),
        }
    }
}

impl ScoringConfig {
    /// Log warnings for suspicious values. Never rejects: the engine
    /// computes something from any well-typed config, and the admin
    /// back-office owns stricter validation.
    pub fn validate(&self) {
        let sum = self.prizes.sum();
        if (sum - 100.0).abs() > f64::EPSILON * 100.0 {
            tracing::warn!(sum, "prize percentages do not sum to 100");
        }
        for (name, pct) in [
            ("first_pct", self.prizes.first_pct),
            ("exact_pct", self.prizes.exact_pct),
            ("groups_pct", self.prizes.groups_pct),
            ("reserve_pct", self.prizes.reserve_pct),
        ] {
            if !(0.0..=100.0).contains(&pct) {
                tracing::warn!(name, pct, "prize percentage outside [0, 100]");
            }
        }
        if self.entry_fee == 0 {
            tracing::warn!("entry_fee is zero, prize pool will always be empty");
        }
    }
}
