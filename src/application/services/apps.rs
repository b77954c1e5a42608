use super::resource_client::ResourceClient;
use crate::application::ports::ResourceExecutor;
use crate::domain::entities::{App, AppQuery};
use crate::domain::errors::ClientResult;
use std::sync::Arc;
use tracing::instrument;

const APPS_PATH: &str = "api/2/apps";

/// Typed operations over the apps resource
pub struct AppsService {
    resource: ResourceClient,
}

impl AppsService {
    pub(crate) fn new(executor: Arc<dyn ResourceExecutor>, base_url: &str) -> Self {
        Self {
            resource: ResourceClient::new(executor, base_url),
        }
    }

    #[instrument(skip_all)]
    pub async fn list(&self, query: &AppQuery) -> ClientResult<Vec<App>> {
        self.resource.get_all(APPS_PATH, query.as_params()).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ClientResult<App> {
        self.resource.get_one(&format!("{APPS_PATH}/{id}")).await
    }

    #[instrument(skip_all)]
    pub async fn create(&self, app: &App) -> ClientResult<App> {
        self.resource.create(APPS_PATH, app).await
    }

    #[instrument(skip(self, app))]
    pub async fn update(&self, id: i64, app: &App) -> ClientResult<App> {
        self.resource.update(&format!("{APPS_PATH}/{id}"), app).await
    }

    #[instrument(skip(self))]
    pub async fn destroy(&self, id: i64) -> ClientResult<()> {
        self.resource.destroy(&format!("{APPS_PATH}/{id}")).await
    }
}
