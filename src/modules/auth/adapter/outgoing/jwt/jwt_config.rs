use std::env;

use tracing::warn;

const DEV_SECRET: &str = "tourism-recommender-dev-secret-change-me";

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub token_expiry_hours: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    pub fn from_env() -> Self {
        let secret_key = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, using the built-in development secret");
            DEV_SECRET.to_string()
        });

        let token_expiry_hours = parse_expiry_hours(env::var("JWT_EXPIRY_HOURS").ok());

        Self {
            secret_key,
            issuer: "tourism-recommender".to_string(),
            token_expiry_hours,
        }
    }
}

const DEFAULT_EXPIRY_HOURS: i64 = 24;

fn parse_expiry_hours(raw: Option<String>) -> i64 {
    match raw.as_deref().map(str::parse::<i64>) {
        Some(Ok(hours)) if hours > 0 => hours,
        Some(_) => {
            warn!("Invalid JWT_EXPIRY_HOURS value, using the 24h default");
            DEFAULT_EXPIRY_HOURS
        }
        None => DEFAULT_EXPIRY_HOURS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_hours_parsing() {
        assert_eq!(parse_expiry_hours(None), 24);
        assert_eq!(parse_expiry_hours(Some("48".into())), 48);
        assert_eq!(parse_expiry_hours(Some("abc".into())), 24);
        assert_eq!(parse_expiry_hours(Some("-1".into())), 24);
        assert_eq!(parse_expiry_hours(Some("0".into())), 24);
    }
}
