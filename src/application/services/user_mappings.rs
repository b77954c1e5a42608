use super::resource_client::ResourceClient;
use crate::application::ports::ResourceExecutor;
use crate::domain::entities::{UserMapping, UserMappingQuery};
use crate::domain::errors::ClientResult;
use std::sync::Arc;
use tracing::instrument;

const MAPPINGS_PATH: &str = "api/2/mappings";

/// Typed operations over the user mappings resource
pub struct UserMappingsService {
    resource: ResourceClient,
}

impl UserMappingsService {
    pub(crate) fn new(executor: Arc<dyn ResourceExecutor>, base_url: &str) -> Self {
        Self {
            resource: ResourceClient::new(executor, base_url),
        }
    }

    #[instrument(skip_all)]
    pub async fn list(&self, query: &UserMappingQuery) -> ClientResult<Vec<UserMapping>> {
        self.resource
            .get_all(MAPPINGS_PATH, query.as_params())
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ClientResult<UserMapping> {
        self.resource
            .get_one(&format!("{MAPPINGS_PATH}/{id}"))
            .await
    }

    #[instrument(skip_all)]
    pub async fn create(&self, mapping: &UserMapping) -> ClientResult<UserMapping> {
        self.resource.create(MAPPINGS_PATH, mapping).await
    }

    #[instrument(skip(self, mapping))]
    pub async fn update(&self, id: i64, mapping: &UserMapping) -> ClientResult<UserMapping> {
        self.resource
            .update(&format!("{MAPPINGS_PATH}/{id}"), mapping)
            .await
    }

    #[instrument(skip(self))]
    pub async fn destroy(&self, id: i64) -> ClientResult<()> {
        self.resource
            .destroy(&format!("{MAPPINGS_PATH}/{id}"))
            .await
    }
}
