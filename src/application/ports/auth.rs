use crate::domain::errors::AuthError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bearer token together with its computed expiry instant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(token: String, expires_in: i64) -> Self {
        Self {
            token,
            expires_at: Utc::now() + chrono::Duration::seconds(expires_in),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    pub fn is_expiring_within(&self, seconds: i64) -> bool {
        Utc::now() + chrono::Duration::seconds(seconds) >= self.expires_at
    }
}

/// Token supply port consumed by the request executor.
///
/// Implementations decide how tokens are obtained and when they are
/// renewed; the executor only reads the current one.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_with_future_expiry_is_not_expired() {
        let token = AccessToken::new("abc".to_string(), 3600);
        assert!(!token.is_expired());
        assert!(token.is_expiring_within(3601));
        assert!(!token.is_expiring_within(60));
    }

    #[test]
    fn token_with_zero_lifetime_is_expired() {
        let token = AccessToken::new("abc".to_string(), 0);
        assert!(token.is_expired());
    }
}
