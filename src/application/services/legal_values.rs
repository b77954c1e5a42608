use super::resource_client::ResourceClient;
use crate::application::ports::ResourceExecutor;
use crate::domain::entities::LegalValue;
use crate::domain::errors::ClientResult;
use std::sync::Arc;
use tracing::instrument;

/// Reads allowed-value catalogs for rule and mapping builders.
///
/// Catalog paths are relative to `api/2/`, e.g. `mappings/conditions` or
/// `apps/rules/actions`; the caller names the catalog it needs.
pub struct LegalValuesService {
    resource: ResourceClient,
}

impl LegalValuesService {
    pub(crate) fn new(executor: Arc<dyn ResourceExecutor>, base_url: &str) -> Self {
        Self {
            resource: ResourceClient::new(executor, base_url),
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, catalog: &str) -> ClientResult<Vec<LegalValue>> {
        let path = format!("api/2/{}", catalog.trim_start_matches('/'));
        self.resource.get_all(&path, Vec::new()).await
    }
}
