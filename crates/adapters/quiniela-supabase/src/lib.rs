pub mod config;
pub mod store;

pub use config::SupabaseConfig;
pub use store::SupabaseConfigStore;
