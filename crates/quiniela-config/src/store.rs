use quiniela_core::config::ScoringConfig;

/// Seam to the external configuration store. `Ok(None)` means no active
/// configuration row exists, which is not an error.
pub trait ConfigStore: Send + Sync {
    fn fetch_active(
        &self,
    ) -> impl Future<Output = Result<Option<ScoringConfig>, StoreError>> + Send;
}

/// Why a configuration fetch failed. The cache layer absorbs these and
/// falls back to defaults; they only surface in logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Transport failure or non-success HTTP status.
    Http(String),
    /// The store answered but the payload did not decode.
    Decode(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(m) => write!(f, "config store request failed: {m}"),
            Self::Decode(m) => write!(f, "config row did not decode: {m}"),
        }
    }
}

impl std::error::Error for StoreError {}
