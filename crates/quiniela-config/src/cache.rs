use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use quiniela_core::config::ScoringConfig;

use crate::store::ConfigStore;

/// How long a fetched (or fallen-back) config stays fresh.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

struct Entry {
    config: ScoringConfig,
    fresh_until: Instant,
}

/// In-memory scoring-config cache in front of a [`ConfigStore`].
///
/// Owned by the composition root and injected where needed; there is no
/// process-wide singleton. Fetch failures and missing rows both fall back
/// to [`ScoringConfig::default`], and the fallback itself is cached for
/// the full TTL, so a transient store outage suppresses retries until the
/// entry expires.
///
/// The check-fetch-store sequence is not single-flighted: concurrent
/// callers racing past an expired entry may each fetch and overwrite the
/// cell last-write-wins. The lock is never held across the fetch await.
pub struct ScoringConfigCache<S> {
    store: S,
    ttl: Duration,
    cell: Mutex<Option<Entry>>,
}

impl<S: ConfigStore> ScoringConfigCache<S> {
    pub fn new(store: S) -> Self {
        Self::with_ttl(store, DEFAULT_TTL)
    }

    pub fn with_ttl(store: S, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            cell: Mutex::new(None),
        }
    }

    /// The active scoring config: cached if fresh, otherwise fetched from
    /// the store. Never fails; store errors are logged and absorbed.
    pub async fn get(&self) -> ScoringConfig {
        if let Some(config) = self.fresh() {
            return config;
        }

        let config = match self.store.fetch_active().await {
            Ok(Some(config)) => {
                tracing::debug!("refreshed scoring config from store");
                config
            },
            Ok(None) => {
                tracing::debug!("no active scoring config row, using defaults");
                ScoringConfig::default()
            },
            Err(e) => {
                tracing::warn!(error = %e, "scoring config fetch failed, using defaults");
                ScoringConfig::default()
            },
        };
        config.validate();

        *self.lock() = Some(Entry {
            config: config.clone(),
            fresh_until: Instant::now() + self.ttl,
        });
        config
    }

    /// Cached config if fresh, else the hardcoded defaults. Never touches
    /// the store, for callers that cannot await.
    pub fn get_sync(&self) -> ScoringConfig {
        self.fresh().unwrap_or_default()
    }

    /// Drop the cached entry so the next [`get`](Self::get) re-fetches.
    /// Called after the admin back-office writes new configuration.
    pub fn invalidate(&self) {
        *self.lock() = None;
    }

    fn fresh(&self) -> Option<ScoringConfig> {
        let cell = self.lock();
        cell.as_ref()
            .filter(|entry| Instant::now() < entry.fresh_until)
            .map(|entry| entry.config.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Entry>> {
        // Nothing panics while holding the lock; recover if it ever does.
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use quiniela_core::test_helpers::marked_config;

    use super::*;
    use crate::store::StoreError;

    enum Response {
        Row(ScoringConfig),
        Empty,
        Fail,
    }

    struct MockStore {
        fetches: AtomicUsize,
        response: Response,
    }

    impl MockStore {
        fn new(response: Response) -> Self {
            Self {
                fetches: AtomicUsize::new(0),
                response,
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    impl ConfigStore for MockStore {
        async fn fetch_active(&self) -> Result<Option<ScoringConfig>, StoreError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Response::Row(config) => Ok(Some(config.clone())),
                Response::Empty => Ok(None),
                Response::Fail => Err(StoreError::Http("connection refused".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn fetches_once_within_ttl() {
        let cache = ScoringConfigCache::new(MockStore::new(Response::Row(marked_config(7))));
        assert_eq!(cache.get().await.exact_points, 7);
        assert_eq!(cache.get().await.exact_points, 7);
        assert_eq!(cache.store.fetch_count(), 1);
    }

    #[tokio::test]
    async fn missing_row_falls_back_to_defaults() {
        let cache = ScoringConfigCache::new(MockStore::new(Response::Empty));
        assert_eq!(cache.get().await, ScoringConfig::default());
    }

    #[tokio::test]
    async fn fetch_failure_falls_back_and_is_cached() {
        let cache = ScoringConfigCache::new(MockStore::new(Response::Fail));
        assert_eq!(cache.get().await, ScoringConfig::default());
        // The fallback is cached: a second get does not retry the store.
        cache.get().await;
        assert_eq!(cache.store.fetch_count(), 1);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let cache = ScoringConfigCache::new(MockStore::new(Response::Row(marked_config(7))));
        cache.get().await;
        cache.invalidate();
        cache.get().await;
        assert_eq!(cache.store.fetch_count(), 2);
    }

    #[tokio::test]
    async fn expired_entry_refetches() {
        let cache = ScoringConfigCache::with_ttl(
            MockStore::new(Response::Row(marked_config(7))),
            Duration::from_millis(20),
        );
        cache.get().await;
        tokio::time::sleep(Duration::from_millis(40)).await;
        cache.get().await;
        assert_eq!(cache.store.fetch_count(), 2);
    }

    #[tokio::test]
    async fn get_sync_never_fetches() {
        let cache = ScoringConfigCache::new(MockStore::new(Response::Row(marked_config(7))));
        // Cold cache: defaults, no store call.
        assert_eq!(cache.get_sync(), ScoringConfig::default());
        assert_eq!(cache.store.fetch_count(), 0);
        // Warm cache: the stored row, still no extra store call.
        cache.get().await;
        assert_eq!(cache.get_sync().exact_points, 7);
        assert_eq!(cache.store.fetch_count(), 1);
    }
}
