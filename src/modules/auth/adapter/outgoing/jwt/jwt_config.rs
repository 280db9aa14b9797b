use crate::config::{optional_or, parse_or, required, ConfigError, Lookup};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from a key lookup (the process environment in production)
    pub fn from_lookup(lookup: &Lookup) -> Result<Self, ConfigError> {
        let secret_key = required(lookup, "JWT_SECRET")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let session_token_expiry = parse_or(lookup, "JWT_SESSION_EXPIRY", 604_800_i64)?;
        if session_token_expiry <= 0 || session_token_expiry > 2_592_000 {
            return Err(ConfigError::Invalid {
                key: "JWT_SESSION_EXPIRY",
                reason: "must be between 1 and 2592000 seconds (30 days)".to_string(),
            });
        }

        let issuer = optional_or(lookup, "JWT_ISSUER", "news-api");

        Ok(Self {
            secret_key,
            issuer,
            session_token_expiry,
        })
    }
}
