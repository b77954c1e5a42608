use super::resource_client::ResourceClient;
use crate::application::ports::ResourceExecutor;
use crate::domain::entities::{AppRule, AppRuleQuery};
use crate::domain::errors::ClientResult;
use std::sync::Arc;
use tracing::instrument;

/// Typed operations over the rules of one app.
///
/// Rules are scoped under their app, so every call takes the owning app id.
pub struct AppRulesService {
    resource: ResourceClient,
}

impl AppRulesService {
    pub(crate) fn new(executor: Arc<dyn ResourceExecutor>, base_url: &str) -> Self {
        Self {
            resource: ResourceClient::new(executor, base_url),
        }
    }

    fn path(app_id: i64) -> String {
        format!("api/2/apps/{app_id}/rules")
    }

    #[instrument(skip(self, query))]
    pub async fn list(&self, app_id: i64, query: &AppRuleQuery) -> ClientResult<Vec<AppRule>> {
        self.resource
            .get_all(&Self::path(app_id), query.as_params())
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, app_id: i64, id: i64) -> ClientResult<AppRule> {
        self.resource
            .get_one(&format!("{}/{id}", Self::path(app_id)))
            .await
    }

    #[instrument(skip(self, rule))]
    pub async fn create(&self, app_id: i64, rule: &AppRule) -> ClientResult<AppRule> {
        self.resource.create(&Self::path(app_id), rule).await
    }

    #[instrument(skip(self, rule))]
    pub async fn update(&self, app_id: i64, id: i64, rule: &AppRule) -> ClientResult<AppRule> {
        self.resource
            .update(&format!("{}/{id}", Self::path(app_id)), rule)
            .await
    }

    #[instrument(skip(self))]
    pub async fn destroy(&self, app_id: i64, id: i64) -> ClientResult<()> {
        self.resource
            .destroy(&format!("{}/{id}", Self::path(app_id)))
            .await
    }
}
