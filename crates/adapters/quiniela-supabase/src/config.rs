/// Connection settings for the Supabase PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Service-role or anon API key, sent as `apikey` and bearer token.
    pub api_key: String,
    /// Table holding the scoring configuration rows.
    pub table: String,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            table: "configuracion_puntos".to_string(),
        }
    }
}

impl SupabaseConfig {
    /// Build from environment variables, falling back to defaults for
    /// anything unset: `QUINIELA_SUPABASE_URL`, `QUINIELA_SUPABASE_KEY`,
    /// `QUINIELA_CONFIG_TABLE`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("QUINIELA_SUPABASE_URL")
            && !url.is_empty()
        {
            config.url = url;
        }
        if let Ok(key) = std::env::var("QUINIELA_SUPABASE_KEY")
            && !key.is_empty()
        {
            config.api_key = key;
        }
        if let Ok(table) = std::env::var("QUINIELA_CONFIG_TABLE")
            && !table.is_empty()
        {
            config.table = table;
        }
        if config.url.is_empty() {
            tracing::warn!("QUINIELA_SUPABASE_URL is not set, config fetches will fail");
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_name() {
        let config = SupabaseConfig::default();
        assert_eq!(config.table, "configuracion_puntos");
        assert!(config.url.is_empty());
    }
}
