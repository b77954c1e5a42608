use super::resource_client::ResourceClient;
use crate::application::ports::ResourceExecutor;
use crate::domain::entities::{SessionLoginToken, SessionLoginTokenParams};
use crate::domain::errors::ClientResult;
use std::sync::Arc;
use tracing::instrument;

const LOGIN_AUTH_PATH: &str = "api/1/login/auth";

/// Creates session login tokens; the remote contract is create-only
pub struct SessionLoginTokensService {
    resource: ResourceClient,
}

impl SessionLoginTokensService {
    pub(crate) fn new(executor: Arc<dyn ResourceExecutor>, base_url: &str) -> Self {
        Self {
            resource: ResourceClient::new(executor, base_url),
        }
    }

    #[instrument(skip_all)]
    pub async fn create(
        &self,
        params: &SessionLoginTokenParams,
    ) -> ClientResult<SessionLoginToken> {
        self.resource.create(LOGIN_AUTH_PATH, params).await
    }
}
