use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::application::ports::{AccessToken, ClientConfig, TokenProvider};
use crate::domain::errors::AuthError;

/// Raw token response from the token endpoint
#[derive(Debug, Deserialize)]
struct RawTokenResponse {
    access_token: String,
    expires_in: i64,
    #[serde(default)]
    account_id: Option<i64>,
}

/// Token provider performing the client-credentials grant.
///
/// The current token is cached and re-acquired only once expired; the
/// executor stays single-attempt and never triggers a refresh itself.
pub struct ClientCredentialsTokenProvider {
    http: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    current: RwLock<Option<AccessToken>>,
}

impl ClientCredentialsTokenProvider {
    pub fn new(http: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            http,
            token_url: config.token_url(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            current: RwLock::new(None),
        }
    }

    async fn acquire(&self) -> Result<AccessToken, AuthError> {
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .json(&serde_json::json!({ "grant_type": "client_credentials" }))
            .send()
            .await
            .map_err(|e| AuthError::TokenAcquisitionFailed {
                reason: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            if status == reqwest::StatusCode::UNAUTHORIZED {
                return Err(AuthError::InvalidCredentials);
            }
            let text = response.text().await.unwrap_or_default();
            return Err(AuthError::TokenAcquisitionFailed {
                reason: format!("HTTP error {status}: {text}"),
            });
        }

        let raw: RawTokenResponse =
            response
                .json()
                .await
                .map_err(|e| AuthError::TokenAcquisitionFailed {
                    reason: format!("failed to parse token response: {e}"),
                })?;

        debug!(account_id = ?raw.account_id, "acquired access token");
        Ok(AccessToken::new(raw.access_token, raw.expires_in))
    }
}

#[async_trait]
impl TokenProvider for ClientCredentialsTokenProvider {
    async fn access_token(&self) -> Result<String, AuthError> {
        {
            let guard = self.current.read().await;
            if let Some(token) = guard.as_ref() {
                if !token.is_expired() {
                    return Ok(token.token.clone());
                }
            }
        }

        let mut guard = self.current.write().await;
        // Another caller may have re-acquired while we waited for the lock
        if let Some(token) = guard.as_ref() {
            if !token.is_expired() {
                return Ok(token.token.clone());
            }
        }

        let token = self.acquire().await?;
        let value = token.token.clone();
        *guard = Some(token);
        Ok(value)
    }
}
