use std::time::Duration;

use axum::http::{HeaderName, HeaderValue};

/// Failure while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Deployment environment, from `APP_ENV` (or `NODE_ENV`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
    Test,
}

impl Environment {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "staging" => Some(Self::Staging),
            "production" | "prod" => Some(Self::Production),
            "test" => Some(Self::Test),
            _ => None,
        }
    }
}

/// Log output format, from `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// Read `LOG_FORMAT`; anything other than `json` means pretty output.
    ///
    /// Kept apart from [`ServerConfig`] because tracing is initialised
    /// before the rest of the configuration is loaded.
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT") {
            Ok(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Connection settings for the shared Redis store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub db: i64,
}

impl RedisConfig {
    /// `redis://[user][:password@]host:port/db`
    pub fn url(&self) -> String {
        let auth = match (&self.username, &self.password) {
            (Some(user), Some(pass)) => format!("{user}:{pass}@"),
            (None, Some(pass)) => format!(":{pass}@"),
            (Some(user), None) => format!("{user}@"),
            (None, None) => String::new(),
        };
        format!("redis://{auth}{}:{}/{}", self.host, self.port, self.db)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Default entry TTL when a route does not set its own.
    pub ttl: Duration,
    /// Capacity of the in-process store.
    pub max_items: usize,
}

/// One rate-limit policy: at most `limit` requests per `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitTier {
    pub window: Duration,
    pub limit: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Applied to every request.
    pub default: RateLimitTier,
    /// Applied to POST, PUT and PATCH instead of the default tier.
    pub write: RateLimitTier,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    pub environment: Environment,
    /// Used as the cache namespace and as a log field.
    pub app_name: String,
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound for the post-shutdown cleanup in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    pub request_id_header: HeaderName,
    pub response_time_header: HeaderName,
    pub cache: CacheConfig,
    /// `None` unless both `REDIS_HOST` and `REDIS_PORT` are set.
    pub redis: Option<RedisConfig>,
    pub rate_limit: RateLimitConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                 |
    /// |-------------------------------|-------------------------|
    /// | `HOST`                        | `0.0.0.0`               |
    /// | `PORT`                        | `3000`                  |
    /// | `APP_ENV` / `NODE_ENV`        | `development`           |
    /// | `APP_NAME`                    | `movie-catalog`         |
    /// | `DATABASE_URL`                | required                |
    /// | `CORS_ORIGINS`                | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS`       | `30`                    |
    /// | `REQUEST_ID_HEADER_NAME`      | `x-request-id`          |
    /// | `RESPONSE_TIME_HEADER_NAME`   | `x-response-time`       |
    /// | `CACHE_TTL` (ms)              | `3600000`               |
    /// | `MAX_ITEM_IN_CACHE`           | `10000`                 |
    /// | `REDIS_HOST`, `REDIS_PORT`    | unset                   |
    /// | `REDIS_USERNAME`, `REDIS_PASSWORD` | unset              |
    /// | `REDIS_DB`                    | `0`                     |
    /// | `DEFAULT_RATE_LIMIT_TTL` (ms) | `60000`                 |
    /// | `DEFAULT_RATE_LIMIT_LIMIT`    | `250`                   |
    /// | `POST_PATCH_RATE_LIMIT_TTL` (ms) | `30000`              |
    /// | `POST_PATCH_RATE_LIMIT_LIMIT` | `20`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = match var("APP_ENV").or_else(|| var("NODE_ENV")) {
            Some(raw) => Environment::parse(&raw).ok_or_else(|| ConfigError::Invalid {
                var: "APP_ENV",
                value: raw.clone(),
                reason: "expected development, staging, production or test".into(),
            })?,
            None => Environment::Development,
        };

        let cors_origins = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let redis = match (var("REDIS_HOST"), var("REDIS_PORT")) {
            (Some(host), Some(port)) => Some(RedisConfig {
                host,
                port: parse_value("REDIS_PORT", &port)?,
                username: var("REDIS_USERNAME"),
                password: var("REDIS_PASSWORD"),
                db: parse_or(&var, "REDIS_DB", 0)?,
            }),
            _ => None,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(&var, "PORT", 3000)?,
            environment,
            app_name: var("APP_NAME").unwrap_or_else(|| "movie-catalog".into()),
            database_url: var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            cors_origins,
            request_timeout_secs: parse_or(&var, "REQUEST_TIMEOUT_SECS", 30)?,
            shutdown_timeout_secs: parse_or(&var, "SHUTDOWN_TIMEOUT_SECS", 30)?,
            request_id_header: header_name(&var, "REQUEST_ID_HEADER_NAME", "x-request-id")?,
            response_time_header: header_name(&var, "RESPONSE_TIME_HEADER_NAME", "x-response-time")?,
            cache: CacheConfig {
                ttl: Duration::from_millis(parse_or(&var, "CACHE_TTL", 3_600_000)?),
                max_items: parse_or(&var, "MAX_ITEM_IN_CACHE", 10_000)?,
            },
            redis,
            rate_limit: RateLimitConfig {
                default: RateLimitTier {
                    window: Duration::from_millis(parse_or(&var, "DEFAULT_RATE_LIMIT_TTL", 60_000)?),
                    limit: parse_or(&var, "DEFAULT_RATE_LIMIT_LIMIT", 250)?,
                },
                write: RateLimitTier {
                    window: Duration::from_millis(parse_or(&var, "POST_PATCH_RATE_LIMIT_TTL", 30_000)?),
                    limit: parse_or(&var, "POST_PATCH_RATE_LIMIT_LIMIT", 20)?,
                },
            },
        })
    }

    /// Response caching is off in the test environment.
    pub fn caching_enabled(&self) -> bool {
        self.environment != Environment::Test
    }

    /// Rate limiting is off in the test environment.
    pub fn rate_limiting_enabled(&self) -> bool {
        self.environment != Environment::Test
    }
}

fn parse_value<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn parse_or<T, F>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => parse_value(var, &raw),
        None => Ok(default),
    }
}

fn header_name<F>(lookup: &F, var: &'static str, default: &'static str) -> Result<HeaderName, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => HeaderName::try_from(raw.trim().to_ascii_lowercase()).map_err(|e| ConfigError::Invalid {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => Ok(HeaderName::from_static(default)),
    }
}
