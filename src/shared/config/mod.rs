//! Application configuration module
//!
//! Provides the process-wide configuration value. It is loaded once at
//! startup (see [`AppConfig::from_env`]) and handed to the server, which
//! derives the auth engine's signing configuration from it.
//!
//! # Environment
//!
//! `ENV_STATE` selects one of `development`, `testing` or `production`.
//! Every other key is looked up with the state's prefix first (`DEV_`,
//! `TEST_`, `PROD_`) and then without a prefix, so `TEST_JWT_SECRET` wins
//! over `JWT_SECRET` when `ENV_STATE=testing`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Lifetime of an access token
pub const DEFAULT_ACCESS_TOKEN_MINUTES: i64 = 30;

/// Lifetime of an email confirmation token (24 hours)
pub const DEFAULT_CONFIRMATION_TOKEN_MINUTES: i64 = 1440;

/// bcrypt work factor used when none is configured
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Signing algorithms accepted for the shared-secret token key
pub const SUPPORTED_ALGORITHMS: [&str; 3] = ["HS256", "HS384", "HS512"];

const DEFAULT_DATABASE_URL: &str = "sqlite://social_media_api.db";
const TEST_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_SERVER_PORT: u16 = 8000;

/// Deployment state, selects the variable prefix and default log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvState {
    #[default]
    Development,
    Testing,
    Production,
}

impl EnvState {
    /// Prefix applied to configuration keys for this state
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Development => "DEV_",
            Self::Testing => "TEST_",
            Self::Production => "PROD_",
        }
    }

    /// Development and testing log at debug level
    pub fn is_verbose(&self) -> bool {
        matches!(self, Self::Development | Self::Testing)
    }
}

impl FromStr for EnvState {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "testing" | "test" => Ok(Self::Testing),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::InvalidValue {
                key: "ENV_STATE",
                value: other.to_string(),
            }),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Name reported in logs
    pub app_name: String,
    /// Deployment state
    pub env_state: EnvState,
    /// sqlx connection string (SQLite)
    pub database_url: String,
    /// Shared secret used to sign and verify every token
    pub jwt_secret: String,
    /// Signing algorithm identifier, one of [`SUPPORTED_ALGORITHMS`]
    pub jwt_algorithm: String,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Access token lifetime in minutes
    pub access_token_minutes: i64,
    /// Confirmation token lifetime in minutes
    pub confirmation_token_minutes: i64,
    /// Directory uploaded files are written to
    pub upload_dir: PathBuf,
    /// Upper bound on a single upload request body
    pub max_upload_bytes: usize,
    /// Port the HTTP server binds to
    pub server_port: u16,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("app_name", &self.app_name)
            .field("env_state", &self.env_state)
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"<redacted>")
            .field("jwt_algorithm", &self.jwt_algorithm)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("access_token_minutes", &self.access_token_minutes)
            .field("confirmation_token_minutes", &self.confirmation_token_minutes)
            .field("upload_dir", &self.upload_dir)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    ///
    /// The caller is expected to have loaded `.env` already.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Used by [`AppConfig::from_env`] and by tests that must not touch the
    /// real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_state = match lookup("ENV_STATE") {
            Some(raw) => raw.parse()?,
            None => EnvState::default(),
        };
        let prefix = env_state.prefix();
        let get = |key: &str| lookup(&format!("{prefix}{key}")).or_else(|| lookup(key));

        let mut builder = Self::builder().env_state(env_state);

        if let Some(name) = get("APP_NAME") {
            builder = builder.app_name(name);
        }
        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = get("JWT_SECRET").or_else(|| get("SECRET_KEY")) {
            builder = builder.jwt_secret(secret);
        }
        if let Some(algorithm) = get("JWT_ALGORITHM").or_else(|| get("ALGORITHM")) {
            builder = builder.jwt_algorithm(algorithm);
        }
        if let Some(cost) = get("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_value("BCRYPT_COST", &cost)?);
        }
        if let Some(minutes) = get("ACCESS_TOKEN_MINUTES") {
            builder = builder.access_token_minutes(parse_value("ACCESS_TOKEN_MINUTES", &minutes)?);
        }
        if let Some(minutes) = get("CONFIRMATION_TOKEN_MINUTES") {
            builder = builder
                .confirmation_token_minutes(parse_value("CONFIRMATION_TOKEN_MINUTES", &minutes)?);
        }
        if let Some(dir) = get("UPLOAD_DIR") {
            builder = builder.upload_dir(dir);
        }
        if let Some(bytes) = get("MAX_UPLOAD_BYTES") {
            builder = builder.max_upload_bytes(parse_value("MAX_UPLOAD_BYTES", &bytes)?);
        }
        if let Some(port) = get("SERVER_PORT") {
            builder = builder.server_port(parse_value("SERVER_PORT", &port)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !SUPPORTED_ALGORITHMS.contains(&self.jwt_algorithm.as_str()) {
            return Err(ConfigError::UnsupportedAlgorithm(self.jwt_algorithm.clone()));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    app_name: Option<String>,
    env_state: EnvState,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    jwt_algorithm: Option<String>,
    bcrypt_cost: Option<u32>,
    access_token_minutes: Option<i64>,
    confirmation_token_minutes: Option<i64>,
    upload_dir: Option<PathBuf>,
    max_upload_bytes: Option<usize>,
    server_port: Option<u16>,
}

impl AppConfigBuilder {
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    pub fn env_state(mut self, state: EnvState) -> Self {
        self.env_state = state;
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn jwt_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.jwt_algorithm = Some(algorithm.into());
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn access_token_minutes(mut self, minutes: i64) -> Self {
        self.access_token_minutes = Some(minutes);
        self
    }

    pub fn confirmation_token_minutes(mut self, minutes: i64) -> Self {
        self.confirmation_token_minutes = Some(minutes);
        self
    }

    pub fn upload_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.upload_dir = Some(dir.into());
        self
    }

    pub fn max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = Some(bytes);
        self
    }

    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Build the configuration
    ///
    /// The signing secret and algorithm have no defaults; their absence is a
    /// startup error.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
        let jwt_algorithm = self
            .jwt_algorithm
            .map(|a| a.trim().to_ascii_uppercase())
            .filter(|a| !a.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_ALGORITHM"))?;

        let default_db = match self.env_state {
            EnvState::Testing => TEST_DATABASE_URL,
            _ => DEFAULT_DATABASE_URL,
        };

        let config = AppConfig {
            app_name: self.app_name.unwrap_or_else(|| "Social Media API".to_string()),
            env_state: self.env_state,
            database_url: self.database_url.unwrap_or_else(|| default_db.to_string()),
            jwt_secret,
            jwt_algorithm,
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            access_token_minutes: self
                .access_token_minutes
                .unwrap_or(DEFAULT_ACCESS_TOKEN_MINUTES),
            confirmation_token_minutes: self
                .confirmation_token_minutes
                .unwrap_or(DEFAULT_CONFIRMATION_TOKEN_MINUTES),
            upload_dir: self
                .upload_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            max_upload_bytes: self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            server_port: self.server_port.unwrap_or(DEFAULT_SERVER_PORT),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),
}
