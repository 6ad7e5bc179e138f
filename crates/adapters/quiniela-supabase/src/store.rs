use serde::{Deserialize, Deserializer};

use quiniela_config::{ConfigStore, StoreError};
use quiniela_core::config::{PrizeSplit, ScoringConfig, StagePoints};

use crate::config::SupabaseConfig;

/// Reads the active scoring configuration row over PostgREST.
pub struct SupabaseConfigStore {
    config: SupabaseConfig,
    client: reqwest::Client,
}

impl SupabaseConfigStore {
    pub fn new(config: SupabaseConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("quiniela-supabase/0.1")
            .build()
            .expect("Failed to create HTTP client");
        Self { config, client }
    }

    fn rows_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=*&activa=eq.true&limit=1",
            self.config.url.trim_end_matches('/'),
            self.config.table
        )
    }
}

impl ConfigStore for SupabaseConfigStore {
    async fn fetch_active(&self) -> Result<Option<ScoringConfig>, StoreError> {
        let resp = self
            .client
            .get(self.rows_url())
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(StoreError::Http(format!(
                "Supabase returned {}",
                resp.status()
            )));
        }

        let rows: Vec<ConfigRow> = resp
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        Ok(rows.into_iter().next().map(ConfigRow::into_scoring_config))
    }
}

/// One row of the configuration table, columns as Supabase names them.
/// Percentage columns are Postgres numerics, which PostgREST can emit as
/// JSON numbers or decimal strings depending on settings.
#[derive(Debug, Deserialize)]
struct ConfigRow {
    puntos_exacto: u32,
    puntos_resultado: u32,
    puntos_fallido: u32,
    puntos_campeon: u32,
    puntos_subcampeon: u32,
    puntos_goleador: u32,
    puntos_colombia_grupos: u32,
    puntos_colombia_octavos: u32,
    puntos_colombia_cuartos: u32,
    puntos_colombia_semifinal: u32,
    puntos_colombia_final: u32,
    puntos_colombia_campeon: u32,
    inscripcion_valor: u64,
    #[serde(deserialize_with = "decimal")]
    porcentaje_primero: f64,
    #[serde(deserialize_with = "decimal")]
    porcentaje_exactos: f64,
    #[serde(deserialize_with = "decimal")]
    porcentaje_grupos: f64,
    #[serde(deserialize_with = "decimal")]
    porcentaje_reserva: f64,
}

impl ConfigRow {
    fn into_scoring_config(self) -> ScoringConfig {
        ScoringConfig {
            exact_points: self.puntos_exacto,
            outcome_points: self.puntos_resultado,
            miss_points: self.puntos_fallido,
            champion_points: self.puntos_campeon,
            runner_up_points: self.puntos_subcampeon,
            top_scorer_points: self.puntos_goleador,
            colombia: StagePoints {
                groups: self.puntos_colombia_grupos,
                round_of_16: self.puntos_colombia_octavos,
                quarter_finals: self.puntos_colombia_cuartos,
                semi_finals: self.puntos_colombia_semifinal,
                r#final: self.puntos_colombia_final,
                champion: self.puntos_colombia_campeon,
            },
            entry_fee: self.inscripcion_valor,
            prizes: PrizeSplit {
                first_pct: self.porcentaje_primero,
                exact_pct: self.porcentaje_exactos,
                groups_pct: self.porcentaje_grupos,
                reserve_pct: self.porcentaje_reserva,
            },
        }
    }
}

fn decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Num(f64),
        Str(String),
    }

    match Decimal::deserialize(deserializer)? {
        Decimal::Num(n) => Ok(n),
        Decimal::Str(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_json(percent_as_string: bool) -> String {
        let (first, exactos, grupos, reserva) = if percent_as_string {
            (r#""55.00""#, r#""25.00""#, r#""10.00""#, r#""10.00""#)
        } else {
            ("55", "25", "10", "10")
        };
        format!(
            r#"{{
                "id": 1,
                "activa": true,
                "puntos_exacto": 5,
                "puntos_resultado": 2,
                "puntos_fallido": 0,
                "puntos_campeon": 15,
                "puntos_subcampeon": 8,
                "puntos_goleador": 8,
                "puntos_colombia_grupos": 2,
                "puntos_colombia_octavos": 3,
                "puntos_colombia_cuartos": 4,
                "puntos_colombia_semifinal": 5,
                "puntos_colombia_final": 6,
                "puntos_colombia_campeon": 10,
                "inscripcion_valor": 120000,
                "porcentaje_primero": {first},
                "porcentaje_exactos": {exactos},
                "porcentaje_grupos": {grupos},
                "porcentaje_reserva": {reserva}
            }}"#
        )
    }

    #[test]
    fn row_maps_to_scoring_config() {
        let row: ConfigRow = serde_json::from_str(&row_json(false)).unwrap();
        let config = row.into_scoring_config();
        assert_eq!(config.exact_points, 5);
        assert_eq!(config.outcome_points, 2);
        assert_eq!(config.champion_points, 15);
        assert_eq!(config.colombia.round_of_16, 3);
        assert_eq!(config.entry_fee, 120_000);
        assert!((config.prizes.first_pct - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn string_percentages_parse() {
        let row: ConfigRow = serde_json::from_str(&row_json(true)).unwrap();
        let config = row.into_scoring_config();
        assert!((config.prizes.exact_pct - 25.0).abs() < f64::EPSILON);
        assert!((config.prizes.sum() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_column_is_a_decode_error() {
        let err = serde_json::from_str::<ConfigRow>(r#"{"puntos_exacto": 5}"#);
        assert!(err.is_err());
    }

    #[test]
    fn rows_url_shape() {
        let store = SupabaseConfigStore::new(SupabaseConfig {
            url: "https://xyz.supabase.co/".to_string(),
            api_key: "key".to_string(),
            table: "configuracion_puntos".to_string(),
        });
        assert_eq!(
            store.rows_url(),
            "https://xyz.supabase.co/rest/v1/configuracion_puntos?select=*&activa=eq.true&limit=1"
        );
    }
}
