//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracker_infra::auth::DEFAULT_SECRET;
use tracker_infra::{DatabaseConfig, JwtConfig};

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    pub cors_origins: Vec<String>,
    pub environment: String,
    /// Required keys that were absent and replaced by a fallback.
    pub missing: Vec<&'static str>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut missing = Vec::new();

        let database = match var("DATABASE_URL").filter(|u| !u.trim().is_empty()) {
            Some(url) => {
                let mut config = DatabaseConfig::new(url);
                config.max_connections = parse_var(&var, "DB_MAX_CONNECTIONS").unwrap_or(100);
                config.min_connections = parse_var(&var, "DB_MIN_CONNECTIONS").unwrap_or(10);
                config.connect_timeout =
                    Duration::from_secs(parse_var(&var, "DB_CONNECT_TIMEOUT_SECS").unwrap_or(10));
                Some(config)
            }
            None => {
                missing.push("DATABASE_URL");
                None
            }
        };

        let mut jwt = JwtConfig::default();
        match var("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => jwt.secret = secret,
            None => {
                missing.push("JWT_SECRET");
                jwt.secret = DEFAULT_SECRET.to_string();
            }
        }
        if let Some(hours) = parse_var(&var, "JWT_EXPIRATION_HOURS").filter(|h: &i64| *h > 0) {
            jwt.expiration_hours = hours;
        }
        if let Some(issuer) = var("JWT_ISSUER").filter(|s| !s.is_empty()) {
            jwt.issuer = issuer;
        }

        let cors_origins = var("CORS_ORIGIN")
            .map(|raw| {
                raw.split(',')
                    .map(|o| o.trim().trim_end_matches('/').to_string())
                    .filter(|o| !o.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]);

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(&var, "PORT").unwrap_or(5000),
            database,
            jwt,
            cors_origins,
            environment: var("APP_ENV").unwrap_or_else(|| "development".to_string()),
            missing,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(
            self.environment.to_ascii_lowercase().as_str(),
            "production" | "prod"
        )
    }

    /// Log each fallback that was applied.
    pub fn report_missing(&self) {
        for key in &self.missing {
            match *key {
                "JWT_SECRET" if self.is_production() => {
                    tracing::error!("JWT_SECRET not set in production; using the placeholder secret")
                }
                "JWT_SECRET" => tracing::warn!("JWT_SECRET not set; using the placeholder secret"),
                "DATABASE_URL" => {
                    tracing::warn!("DATABASE_URL not set; data is kept in memory only")
                }
                other => tracing::warn!(key = other, "Missing configuration"),
            }
        }
    }
}

fn parse_var<T: FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    var(key).and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_report_missing_keys() {
        let config = config(&[]);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert!(config.database.is_none());
        assert_eq!(config.jwt.secret, DEFAULT_SECRET);
        assert_eq!(config.jwt.expiration_hours, 24);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.missing, vec!["DATABASE_URL", "JWT_SECRET"]);
        assert!(!config.is_production());
    }

    #[test]
    fn test_values_are_read() {
        let config = config(&[
            ("PORT", "8081"),
            ("DATABASE_URL", "postgres://localhost/workouts"),
            ("DB_MAX_CONNECTIONS", "20"),
            ("JWT_SECRET", "s3cret"),
            ("JWT_EXPIRATION_HOURS", "2"),
            ("CORS_ORIGIN", "https://a.example/, https://b.example"),
            ("APP_ENV", "Production"),
        ]);

        assert_eq!(config.port, 8081);
        let db = config.database.as_ref().unwrap();
        assert_eq!(db.max_connections, 20);
        assert_eq!(db.min_connections, 10);
        assert_eq!(config.jwt.secret, "s3cret");
        assert_eq!(config.jwt.expiration_hours, 2);
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert!(config.missing.is_empty());
        assert!(config.is_production());
    }

    #[test]
    fn test_unparsable_numbers_fall_back() {
        let config = config(&[("PORT", "http"), ("JWT_EXPIRATION_HOURS", "-3")]);
        assert_eq!(config.port, 5000);
        assert_eq!(config.jwt.expiration_hours, 24);
    }
}
