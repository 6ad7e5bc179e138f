use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;

/// The pool and its four buckets, in whole Colombian pesos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeDistribution {
    pub total_pool: u64,
    /// Overall leaderboard winner.
    pub first: u64,
    /// Split among users with the most exact-scoreline hits.
    pub exact: u64,
    /// Group-stage leader.
    pub groups: u64,
    /// Operating reserve.
    pub reserve: u64,
}

/// Compute the prize pool and its split for a participant count.
///
/// Each bucket is floored independently, so the four buckets can sum to
/// slightly less than the pool (at most one peso short per bucket). That
/// remainder is intentionally left unallocated rather than redistributed.
/// Zero participants is a valid input and yields an all-zero distribution.
pub fn distribute_prizes(participants: u64, config: &ScoringConfig) -> PrizeDistribution {
    let total_pool = participants * config.entry_fee;
    PrizeDistribution {
        total_pool,
        first: bucket(total_pool, config.prizes.first_pct),
        exact: bucket(total_pool, config.prizes.exact_pct),
        groups: bucket(total_pool, config.prizes.groups_pct),
        reserve: bucket(total_pool, config.prizes.reserve_pct),
    }
}

fn bucket(pool: u64, pct: f64) -> u64 {
    (pool as f64 * (pct / 100.0)).floor() as u64
}
