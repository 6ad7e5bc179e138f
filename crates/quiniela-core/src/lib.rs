pub mod config;
pub mod currency;
pub mod prizes;
pub mod scoring;
pub mod stage;
pub mod standings;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::config::ScoringConfig;
    use crate::standings::UserTally;

    /// A config that is distinguishable from the defaults at a glance,
    /// for cache and override tests.
    pub fn marked_config(exact_points: u32) -> ScoringConfig {
        ScoringConfig {
            exact_points,
            ..ScoringConfig::default()
        }
    }

    /// Create `n` tallies with descending points, names Jugador1..JugadorN.
    pub fn make_tallies(n: u32) -> Vec<UserTally> {
        (0..n)
            .map(|i| UserTally {
                user_id: format!("u{}", i + 1),
                display_name: format!("Jugador{}", i + 1),
                points: (n - i) * 3,
                exact_hits: 0,
            })
            .collect()
    }
}
