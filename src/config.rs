use std::env;

use anyhow::Context;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/starwars.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub jwt_secret: Option<String>,
    pub token_ttl_hours: i64,
    /// Subject of favorites requests that carry no bearer token.
    pub default_user_id: i32,
}

impl AppConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            db_max_connections: 10,
            jwt_secret: None,
            token_ttl_hours: 24,
            default_user_id: 1,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let mut config = Self::new(database_url);

        if let Some(host) = lookup("APP_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("APP_PORT").or_else(|| lookup("PORT")) {
            config.port = port
                .parse()
                .with_context(|| format!("invalid port `{port}`"))?;
        }
        if let Some(max) = lookup("DB_MAX_CONNECTIONS") {
            config.db_max_connections = max
                .parse()
                .with_context(|| format!("invalid DB_MAX_CONNECTIONS `{max}`"))?;
        }
        config.jwt_secret = lookup("JWT_SECRET").filter(|s| !s.is_empty());
        if let Some(ttl) = lookup("TOKEN_TTL_HOURS") {
            config.token_ttl_hours = ttl
                .parse()
                .with_context(|| format!("invalid TOKEN_TTL_HOURS `{ttl}`"))?;
            if config.token_ttl_hours <= 0
                || chrono::Duration::try_hours(config.token_ttl_hours).is_none()
            {
                anyhow::bail!("TOKEN_TTL_HOURS `{ttl}` is out of range");
            }
        }
        if let Some(id) = lookup("DEFAULT_USER_ID") {
            config.default_user_id = id
                .parse()
                .with_context(|| format!("invalid DEFAULT_USER_ID `{id}`"))?;
        }

        Ok(config)
    }
}
