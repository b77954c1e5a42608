use super::resource_client::ResourceClient;
use crate::application::ports::ResourceExecutor;
use crate::domain::entities::{SmartHook, SmartHookQuery};
use crate::domain::errors::ClientResult;
use std::sync::Arc;
use tracing::instrument;

const HOOKS_PATH: &str = "api/2/hooks";

/// Typed operations over the smart hooks resource.
///
/// Hook ids are server-minted opaque strings, unlike the numeric ids used
/// elsewhere in the API.
pub struct SmartHooksService {
    resource: ResourceClient,
}

impl SmartHooksService {
    pub(crate) fn new(executor: Arc<dyn ResourceExecutor>, base_url: &str) -> Self {
        Self {
            resource: ResourceClient::new(executor, base_url),
        }
    }

    #[instrument(skip_all)]
    pub async fn list(&self, query: &SmartHookQuery) -> ClientResult<Vec<SmartHook>> {
        self.resource.get_all(HOOKS_PATH, query.as_params()).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> ClientResult<SmartHook> {
        self.resource.get_one(&format!("{HOOKS_PATH}/{id}")).await
    }

    #[instrument(skip_all)]
    pub async fn create(&self, hook: &SmartHook) -> ClientResult<SmartHook> {
        self.resource.create(HOOKS_PATH, hook).await
    }

    #[instrument(skip(self, hook))]
    pub async fn update(&self, id: &str, hook: &SmartHook) -> ClientResult<SmartHook> {
        self.resource
            .update(&format!("{HOOKS_PATH}/{id}"), hook)
            .await
    }

    #[instrument(skip(self))]
    pub async fn destroy(&self, id: &str) -> ClientResult<()> {
        self.resource.destroy(&format!("{HOOKS_PATH}/{id}")).await
    }
}
