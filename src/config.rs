use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    pub url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub jwt: JwtConfig,
    pub pipeline: PipelineConfig,
    /// Report "email not found" / "wrong password" instead of one generic
    /// message. Leaks account existence; off unless explicitly enabled.
    pub distinct_auth_errors: bool,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let env = Env(&get);
        let database_url = env.get("DATABASE_URL").context("DATABASE_URL is not set")?;

        let secret = env.get("API_SECRET_KEY").context("API_SECRET_KEY is not set")?;
        anyhow::ensure!(!secret.is_empty(), "API_SECRET_KEY must not be empty");

        let jwt = JwtConfig {
            secret,
            issuer: env.get_or("JWT_ISSUER", "solomon"),
            audience: env.get_or("JWT_AUDIENCE", "solomon-dashboard"),
            ttl_minutes: env.positive("JWT_TTL_MINUTES").unwrap_or(30),
        };

        let pipeline = PipelineConfig {
            url: env
                .get("PIPELINE_SERVICE_URL")
                .context("PIPELINE_SERVICE_URL is not set")?,
            timeout: Duration::from_secs(env.positive("PIPELINE_TIMEOUT_SECS").unwrap_or(10)),
        };

        Ok(Self {
            database_url,
            db_max_connections: env.positive("DB_MAX_CONNECTIONS").unwrap_or(10),
            jwt,
            pipeline,
            distinct_auth_errors: env.flag("AUTH_DISTINCT_ERRORS"),
            host: env.get_or("APP_HOST", "0.0.0.0"),
            port: env.parse("APP_PORT").unwrap_or(5000),
        })
    }
}

/// Settings for the standalone transaction reader.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsConfig {
    pub csv_path: String,
    pub normalize_values: bool,
    pub missing_file_not_found: bool,
    pub host: String,
    pub port: u16,
}

impl TransactionsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let env = Env(&get);
        Self {
            csv_path: env.get_or("TRANSACTIONS_CSV", "orders.csv"),
            normalize_values: env.flag("TRANSACTIONS_NORMALIZE_VALUES"),
            missing_file_not_found: env.flag("TRANSACTIONS_MISSING_FILE_404"),
            host: env.get_or("APP_HOST", "0.0.0.0"),
            port: env.parse("APP_PORT").unwrap_or(8000),
        }
    }
}

struct Env<'a>(&'a dyn Fn(&str) -> Option<String>);

impl Env<'_> {
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }

    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.into())
    }

    fn parse<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.trim().parse::<T>().ok())
    }

    /// Zero or negative values are ignored.
    fn positive<T: std::str::FromStr + PartialOrd + Default>(&self, key: &str) -> Option<T> {
        self.parse::<T>(key).filter(|v| *v > T::default())
    }

    fn flag(&self, key: &str) -> bool {
        self.get(key)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("DATABASE_URL", "postgres://localhost/solomon"),
        ("API_SECRET_KEY", "s3cret"),
        ("PIPELINE_SERVICE_URL", "http://pipeline:8081/run"),
    ];

    fn with_required<'a>(extra: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
        REQUIRED.iter().copied().chain(extra.iter().copied()).collect()
    }

    #[test]
    fn gateway_defaults() {
        let vars = with_required(&[]);
        let cfg = AppConfig::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(cfg.database_url, "postgres://localhost/solomon");
        assert_eq!(cfg.jwt.secret, "s3cret");
        assert_eq!(cfg.jwt.ttl_minutes, 30);
        assert_eq!(cfg.jwt.issuer, "solomon");
        assert_eq!(cfg.jwt.audience, "solomon-dashboard");
        assert_eq!(cfg.pipeline.url, "http://pipeline:8081/run");
        assert_eq!(cfg.pipeline.timeout, Duration::from_secs(10));
        assert_eq!(cfg.db_max_connections, 10);
        assert!(!cfg.distinct_auth_errors);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 5000);
    }

    #[test]
    fn gateway_overrides() {
        let vars = with_required(&[
            ("JWT_TTL_MINUTES", "15"),
            ("PIPELINE_TIMEOUT_SECS", "3"),
            ("AUTH_DISTINCT_ERRORS", "true"),
            ("APP_PORT", "9000"),
        ]);
        let cfg = AppConfig::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(cfg.jwt.ttl_minutes, 15);
        assert_eq!(cfg.pipeline.timeout, Duration::from_secs(3));
        assert!(cfg.distinct_auth_errors);
        assert_eq!(cfg.port, 9000);
    }

    #[test]
    fn non_positive_durations_fall_back_to_defaults() {
        let vars = with_required(&[
            ("JWT_TTL_MINUTES", "-5"),
            ("PIPELINE_TIMEOUT_SECS", "0"),
            ("DB_MAX_CONNECTIONS", "0"),
        ]);
        let cfg = AppConfig::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(cfg.jwt.ttl_minutes, 30);
        assert_eq!(cfg.pipeline.timeout, Duration::from_secs(10));
        assert_eq!(cfg.db_max_connections, 10);
    }

    #[test]
    fn unparsable_numbers_fall_back_to_defaults() {
        let vars = with_required(&[("JWT_TTL_MINUTES", "half an hour"), ("APP_PORT", "http")]);
        let cfg = AppConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(cfg.jwt.ttl_minutes, 30);
        assert_eq!(cfg.port, 5000);
    }

    #[test]
    fn flag_values() {
        for (raw, expected) in [
            ("1", true),
            ("true", true),
            ("TRUE", true),
            ("yes", true),
            ("0", false),
            ("false", false),
            ("no", false),
            ("", false),
        ] {
            let vars = with_required(&[("AUTH_DISTINCT_ERRORS", raw)]);
            let cfg = AppConfig::from_lookup(lookup(&vars)).unwrap();
            assert_eq!(cfg.distinct_auth_errors, expected, "value {raw:?}");
        }
    }

    #[test]
    fn empty_secret_is_rejected() {
        let vars = [
            ("DATABASE_URL", "postgres://localhost/solomon"),
            ("API_SECRET_KEY", ""),
            ("PIPELINE_SERVICE_URL", "http://pipeline:8081/run"),
        ];
        let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert_eq!(err.to_string(), "API_SECRET_KEY must not be empty");
    }

    #[test]
    fn required_vars_are_reported() {
        for missing in ["DATABASE_URL", "API_SECRET_KEY", "PIPELINE_SERVICE_URL"] {
            let vars: Vec<_> = REQUIRED.iter().copied().filter(|(k, _)| *k != missing).collect();
            let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
            assert_eq!(err.to_string(), format!("{missing} is not set"));
        }
    }

    #[test]
    fn transactions_defaults() {
        let cfg = TransactionsConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg.csv_path, "orders.csv");
        assert!(!cfg.normalize_values);
        assert!(!cfg.missing_file_not_found);
        assert_eq!(cfg.port, 8000);
    }

    #[test]
    fn transactions_flags() {
        let vars = [
            ("TRANSACTIONS_CSV", "/data/orders.csv"),
            ("TRANSACTIONS_NORMALIZE_VALUES", "yes"),
            ("TRANSACTIONS_MISSING_FILE_404", "1"),
        ];
        let cfg = TransactionsConfig::from_lookup(lookup(&vars));
        assert_eq!(cfg.csv_path, "/data/orders.csv");
        assert!(cfg.normalize_values);
        assert!(cfg.missing_file_not_found);
    }
}
