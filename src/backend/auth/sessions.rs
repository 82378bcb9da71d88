/**
 * Session Tokens
 *
 * This module issues and verifies the signed JWTs used by the application.
 * Two kinds of token share one signing key and algorithm:
 *
 * - `access` tokens authenticate API requests (30 minutes)
 * - `confirmation` tokens prove control of an email address (24 hours)
 *
 * The `type` claim keeps the two apart: a token is only accepted by the
 * operation it was issued for.
 *
 * # Verification Order
 *
 * 1. Signature, algorithm and expiry
 * 2. Presence of the `sub` claim
 * 3. The `type` claim
 */

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::backend::auth::error::TokenError;
use crate::backend::logging::obfuscate_email;
use crate::shared::config::{AppConfig, ConfigError, DEFAULT_BCRYPT_COST};

/// Purpose a token was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Confirmation,
}

impl TokenType {
    /// Value stored in the `type` claim
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Confirmation => "confirmation",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT claims structure
///
/// `sub` and `type` are optional on the way in so that tokens lacking them
/// are reported as such instead of as undecodable.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Token type (`access` or `confirmation`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    #[serde(default)]
    pub iat: i64,
}

/// Signing configuration shared by every token the process issues
#[derive(Clone)]
pub struct AuthConfig {
    secret: String,
    algorithm: Algorithm,
    access_ttl: Duration,
    confirmation_ttl: Duration,
    bcrypt_cost: u32,
}

impl AuthConfig {
    /// Create a configuration with the default token lifetimes
    ///
    /// Only the HMAC family is accepted since tokens are signed with a
    /// shared secret.
    pub fn new(secret: impl Into<String>, algorithm: &str) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        let algorithm = parse_algorithm(algorithm)?;

        Ok(Self {
            secret,
            algorithm,
            access_ttl: Duration::minutes(crate::shared::config::DEFAULT_ACCESS_TOKEN_MINUTES),
            confirmation_ttl: Duration::minutes(
                crate::shared::config::DEFAULT_CONFIRMATION_TOKEN_MINUTES,
            ),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        })
    }

    /// Derive the signing configuration from the application configuration
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.jwt_secret.clone(), &config.jwt_algorithm)?
            .with_access_ttl(Duration::minutes(config.access_token_minutes))
            .with_confirmation_ttl(Duration::minutes(config.confirmation_token_minutes))
            .with_bcrypt_cost(config.bcrypt_cost))
    }

    pub fn with_access_ttl(mut self, ttl: Duration) -> Self {
        self.access_ttl = ttl;
        self
    }

    pub fn with_confirmation_ttl(mut self, ttl: Duration) -> Self {
        self.confirmation_ttl = ttl;
        self
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost
    }
}

fn parse_algorithm(raw: &str) -> Result<Algorithm, ConfigError> {
    let normalised = raw.trim().to_ascii_uppercase();
    match Algorithm::from_str(&normalised) {
        Ok(alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => Ok(alg),
        _ => Err(ConfigError::UnsupportedAlgorithm(raw.to_string())),
    }
}

/// Token issuer and verifier
///
/// Holds the prepared keys so they are built once per process rather than
/// once per request. Cheap to clone.
#[derive(Clone)]
pub struct SessionTokens {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    confirmation_ttl: Duration,
}

impl SessionTokens {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(config.algorithm);
        validation.leeway = 0;

        Self {
            header: Header::new(config.algorithm),
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            access_ttl: config.access_ttl,
            confirmation_ttl: config.confirmation_ttl,
        }
    }

    /// Create an access token for `email`
    pub fn create_access_token(&self, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        tracing::debug!(email = %obfuscate_email(email), "Creating access token");
        self.issue(email, TokenType::Access, self.access_ttl)
    }

    /// Create an email confirmation token for `email`
    pub fn create_confirmation_token(
        &self,
        email: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        tracing::debug!(email = %obfuscate_email(email), "Creating confirmation token");
        self.issue(email, TokenType::Confirmation, self.confirmation_ttl)
    }

    fn issue(
        &self,
        email: &str,
        token_type: TokenType,
        ttl: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: Some(email.to_string()),
            token_type: Some(token_type.as_str().to_string()),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };
        encode(&self.header, &claims, &self.encoding_key)
    }

    /// Verify `token` and return its subject if it was issued as `expected`
    pub fn subject_for_token_type(
        &self,
        token: &str,
        expected: TokenType,
    ) -> Result<String, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Rejected expired {} token", expected);
                    TokenError::TokenExpired
                }
                kind => {
                    tracing::debug!("Rejected {} token: {:?}", expected, kind);
                    TokenError::InvalidToken
                }
            }
        })?;

        let Claims { sub, token_type, .. } = data.claims;
        let subject = sub
            .filter(|s| !s.is_empty())
            .ok_or(TokenError::MissingSubject)?;

        if token_type.as_deref() != Some(expected.as_str()) {
            return Err(TokenError::WrongTokenType {
                expected,
                found: token_type,
            });
        }

        Ok(subject)
    }
}
