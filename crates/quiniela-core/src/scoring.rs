use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::stage::Stage;

/// A scoreline: goals for the home and away side. Used both for a user's
/// prediction and for the actual result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    pub fn outcome(&self) -> Outcome {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Outcome::HomeWin,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::AwayWin,
        }
    }
}

/// The coarse category of a scoreline, independent of margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    HomeWin,
    Draw,
    AwayWin,
}

/// Points awarded for one match prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPoints {
    pub points: u32,
    /// True only when the exact scoreline was hit.
    pub exact: bool,
}

/// Score one match prediction against the actual result.
///
/// Priority order, first match wins:
/// 1. exact scoreline -> `exact_points`, exact = true
/// 2. same outcome category -> `outcome_points`
/// 3. otherwise -> `miss_points`
///
/// Goal counts are not bounds-checked here; the prediction form validates
/// input before it reaches the engine.
pub fn score_match(prediction: Score, result: Score, config: &ScoringConfig) -> MatchPoints {
    if prediction == result {
        return MatchPoints {
            points: config.exact_points,
            exact: true,
        };
    }
    if prediction.outcome() == result.outcome() {
        return MatchPoints {
            points: config.outcome_points,
            exact: false,
        };
    }
    MatchPoints {
        points: config.miss_points,
        exact: false,
    }
}

/// Score the "how far does Colombia go" prediction. Points only when the
/// predicted stage equals the actual one; there is no partial credit for
/// being one stage off in either direction. Either side absent scores 0.
pub fn score_colombia_run(
    prediction: Option<Stage>,
    actual: Option<Stage>,
    config: &ScoringConfig,
) -> u32 {
    match (prediction, actual) {
        (Some(predicted), Some(actual)) if predicted == actual => {
            config.colombia.for_stage(predicted)
        },
        _ => 0,
    }
}

/// Tournament-level special picks: champion, runner-up, top scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialPicks {
    pub champion: Option<String>,
    pub runner_up: Option<String>,
    pub top_scorer: Option<String>,
}

/// Flat bonuses for the tournament-level picks, one per matched field.
/// Names are compared as stored; normalization happens where picks are
/// captured, not here.
pub fn score_specials(
    prediction: &SpecialPicks,
    actual: &SpecialPicks,
    config: &ScoringConfig,
) -> u32 {
    let mut total = 0;
    if hit(&prediction.champion, &actual.champion) {
        total += config.champion_points;
    }
    if hit(&prediction.runner_up, &actual.runner_up) {
        total += config.runner_up_points;
    }
    if hit(&prediction.top_scorer, &actual.top_scorer) {
        total += config.top_scorer_points;
    }
    total
}

fn hit(prediction: &Option<String>, actual: &Option<String>) -> bool {
    matches!((prediction, actual), (Some(p), Some(a)) if p == a)
}
