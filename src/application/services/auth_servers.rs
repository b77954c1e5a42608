use super::resource_client::ResourceClient;
use crate::application::ports::ResourceExecutor;
use crate::domain::entities::{AuthServer, AuthServerQuery};
use crate::domain::errors::ClientResult;
use std::sync::Arc;
use tracing::instrument;

const AUTH_SERVERS_PATH: &str = "api/2/api_authorizations";

/// Typed operations over the API authorization servers resource
pub struct AuthServersService {
    resource: ResourceClient,
}

impl AuthServersService {
    pub(crate) fn new(executor: Arc<dyn ResourceExecutor>, base_url: &str) -> Self {
        Self {
            resource: ResourceClient::new(executor, base_url),
        }
    }

    #[instrument(skip_all)]
    pub async fn list(&self, query: &AuthServerQuery) -> ClientResult<Vec<AuthServer>> {
        self.resource
            .get_all(AUTH_SERVERS_PATH, query.as_params())
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ClientResult<AuthServer> {
        self.resource
            .get_one(&format!("{AUTH_SERVERS_PATH}/{id}"))
            .await
    }

    #[instrument(skip_all)]
    pub async fn create(&self, server: &AuthServer) -> ClientResult<AuthServer> {
        self.resource.create(AUTH_SERVERS_PATH, server).await
    }

    #[instrument(skip(self, server))]
    pub async fn update(&self, id: i64, server: &AuthServer) -> ClientResult<AuthServer> {
        self.resource
            .update(&format!("{AUTH_SERVERS_PATH}/{id}"), server)
            .await
    }

    #[instrument(skip(self))]
    pub async fn destroy(&self, id: i64) -> ClientResult<()> {
        self.resource
            .destroy(&format!("{AUTH_SERVERS_PATH}/{id}"))
            .await
    }
}
