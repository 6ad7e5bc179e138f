pub mod cache;
pub mod store;

pub use cache::{DEFAULT_TTL, ScoringConfigCache};
pub use store::{ConfigStore, StoreError};
