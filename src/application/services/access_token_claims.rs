use super::resource_client::ResourceClient;
use crate::application::ports::ResourceExecutor;
use crate::domain::entities::AccessTokenClaim;
use crate::domain::errors::ClientResult;
use std::sync::Arc;
use tracing::instrument;

/// Typed operations over the claims of one authorization server
pub struct AccessTokenClaimsService {
    resource: ResourceClient,
}

impl AccessTokenClaimsService {
    pub(crate) fn new(executor: Arc<dyn ResourceExecutor>, base_url: &str) -> Self {
        Self {
            resource: ResourceClient::new(executor, base_url),
        }
    }

    fn path(auth_server_id: i64) -> String {
        format!("api/2/api_authorizations/{auth_server_id}/claims")
    }

    #[instrument(skip(self))]
    pub async fn list(&self, auth_server_id: i64) -> ClientResult<Vec<AccessTokenClaim>> {
        self.resource
            .get_all(&Self::path(auth_server_id), Vec::new())
            .await
    }

    #[instrument(skip(self, claim))]
    pub async fn create(
        &self,
        auth_server_id: i64,
        claim: &AccessTokenClaim,
    ) -> ClientResult<AccessTokenClaim> {
        self.resource.create(&Self::path(auth_server_id), claim).await
    }

    #[instrument(skip(self, claim))]
    pub async fn update(
        &self,
        auth_server_id: i64,
        id: i64,
        claim: &AccessTokenClaim,
    ) -> ClientResult<AccessTokenClaim> {
        self.resource
            .update(&format!("{}/{id}", Self::path(auth_server_id)), claim)
            .await
    }

    #[instrument(skip(self))]
    pub async fn destroy(&self, auth_server_id: i64, id: i64) -> ClientResult<()> {
        self.resource
            .destroy(&format!("{}/{id}", Self::path(auth_server_id)))
            .await
    }
}
