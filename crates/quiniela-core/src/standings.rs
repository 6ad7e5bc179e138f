use serde::{Deserialize, Serialize};

/// Accumulated totals for one participant, as supplied by the caller.
/// The engine does not fetch predictions or results itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTally {
    pub user_id: String,
    pub display_name: String,
    pub points: u32,
    /// How many exact-scoreline hits contributed to `points`.
    pub exact_hits: u32,
}

/// A leaderboard row: 1-based position plus the tally it ranks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub position: u32,
    pub tally: UserTally,
}

/// Rank tallies into a leaderboard. Ordering is points desc, then exact
/// hits desc, then display name asc, so the result is deterministic for
/// any input order. Ties on (points, exact_hits) share a position and the
/// following position skips, competition style.
pub fn rank(mut tallies: Vec<UserTally>) -> Vec<Standing> {
    tallies.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.exact_hits.cmp(&a.exact_hits))
            .then(a.display_name.cmp(&b.display_name))
    });

    let mut standings = Vec::with_capacity(tallies.len());
    let mut position = 0u32;
    let mut prev_key: Option<(u32, u32)> = None;
    for (i, tally) in tallies.into_iter().enumerate() {
        let key = (tally.points, tally.exact_hits);
        if prev_key != Some(key) {
            position = i as u32 + 1;
            prev_key = Some(key);
        }
        standings.push(Standing { position, tally });
    }
    standings
}
