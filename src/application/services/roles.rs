use super::resource_client::ResourceClient;
use crate::application::ports::ResourceExecutor;
use crate::domain::entities::{Role, RoleQuery};
use crate::domain::errors::ClientResult;
use std::sync::Arc;
use tracing::instrument;

const ROLES_PATH: &str = "api/1/roles";

/// Typed operations over the roles resource
pub struct RolesService {
    resource: ResourceClient,
}

impl RolesService {
    pub(crate) fn new(executor: Arc<dyn ResourceExecutor>, base_url: &str) -> Self {
        Self {
            resource: ResourceClient::new(executor, base_url),
        }
    }

    #[instrument(skip_all)]
    pub async fn list(&self, query: &RoleQuery) -> ClientResult<Vec<Role>> {
        self.resource.get_all(ROLES_PATH, query.as_params()).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ClientResult<Role> {
        self.resource.get_one(&format!("{ROLES_PATH}/{id}")).await
    }

    #[instrument(skip_all)]
    pub async fn create(&self, role: &Role) -> ClientResult<Role> {
        self.resource.create(ROLES_PATH, role).await
    }

    #[instrument(skip(self, role))]
    pub async fn update(&self, id: i64, role: &Role) -> ClientResult<Role> {
        self.resource
            .update(&format!("{ROLES_PATH}/{id}"), role)
            .await
    }

    #[instrument(skip(self))]
    pub async fn destroy(&self, id: i64) -> ClientResult<()> {
        self.resource.destroy(&format!("{ROLES_PATH}/{id}")).await
    }
}
