use async_trait::async_trait;

use crate::application::ports::TokenProvider;
use crate::domain::errors::AuthError;

/// Token provider returning a fixed, externally managed token.
///
/// Useful when the embedding application handles token lifecycle itself,
/// and for tests.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String, AuthError> {
        Ok(self.token.clone())
    }
}
