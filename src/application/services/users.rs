use super::resource_client::ResourceClient;
use crate::application::ports::ResourceExecutor;
use crate::domain::entities::{User, UserQuery};
use crate::domain::errors::ClientResult;
use std::sync::Arc;
use tracing::instrument;

const USERS_PATH: &str = "api/2/users";

/// Typed operations over the users resource
pub struct UsersService {
    resource: ResourceClient,
}

impl UsersService {
    pub(crate) fn new(executor: Arc<dyn ResourceExecutor>, base_url: &str) -> Self {
        Self {
            resource: ResourceClient::new(executor, base_url),
        }
    }

    #[instrument(skip_all)]
    pub async fn list(&self, query: &UserQuery) -> ClientResult<Vec<User>> {
        self.resource.get_all(USERS_PATH, query.as_params()).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ClientResult<User> {
        self.resource.get_one(&format!("{USERS_PATH}/{id}")).await
    }

    #[instrument(skip_all)]
    pub async fn create(&self, user: &User) -> ClientResult<User> {
        self.resource.create(USERS_PATH, user).await
    }

    #[instrument(skip(self, user))]
    pub async fn update(&self, id: i64, user: &User) -> ClientResult<User> {
        self.resource
            .update(&format!("{USERS_PATH}/{id}"), user)
            .await
    }

    #[instrument(skip(self))]
    pub async fn destroy(&self, id: i64) -> ClientResult<()> {
        self.resource.destroy(&format!("{USERS_PATH}/{id}")).await
    }
}
