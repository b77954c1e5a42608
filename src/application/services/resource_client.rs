use crate::application::ports::{ResourceExecutor, ResourceRequest};
use crate::domain::errors::{ApiClientError, ClientResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Generic request-building layer shared by every resource service.
///
/// Services supply a resource path and payload types; everything else
/// (URL joining, JSON encoding, decode of the returned bytes, cursor
/// paging) lives here once instead of once per resource.
#[derive(Clone)]
pub struct ResourceClient {
    executor: Arc<dyn ResourceExecutor>,
    base_url: String,
}

impl ResourceClient {
    pub(crate) fn new(executor: Arc<dyn ResourceExecutor>, base_url: &str) -> Self {
        Self {
            executor,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetch a single resource
    pub(crate) async fn get_one<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self
            .executor
            .execute(ResourceRequest::get(self.url(path)))
            .await?;
        decode(&response.body)
    }

    /// Fetch every page of a list endpoint, following the `After-Cursor`
    /// header until the server stops returning one. Each page is a single
    /// executor attempt.
    pub(crate) async fn get_all<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> ClientResult<Vec<T>> {
        let url = self.url(path);
        let mut collected = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut page_query = query.clone();
            if let Some(ref cursor) = cursor {
                // The server's cursor supersedes any caller-supplied one
                page_query.retain(|(key, _)| key != "cursor");
                page_query.push(("cursor".to_string(), cursor.clone()));
            }

            let response = self
                .executor
                .execute(ResourceRequest::get(url.clone()).with_query(page_query))
                .await?;
            let mut page: Vec<T> = decode(&response.body)?;
            collected.append(&mut page);

            match response.after_cursor {
                Some(next) if !next.is_empty() => cursor = Some(next),
                _ => break,
            }
        }

        debug!(path, count = collected.len(), "fetched resource list");
        Ok(collected)
    }

    pub(crate) async fn create<B, T>(&self, path: &str, payload: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .executor
            .execute(ResourceRequest::post(self.url(path)).with_body(encode(payload)?))
            .await?;
        decode(&response.body)
    }

    pub(crate) async fn update<B, T>(&self, path: &str, payload: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .executor
            .execute(ResourceRequest::put(self.url(path)).with_body(encode(payload)?))
            .await?;
        decode(&response.body)
    }

    pub(crate) async fn destroy(&self, path: &str) -> ClientResult<()> {
        self.executor
            .execute(ResourceRequest::delete(self.url(path)))
            .await?;
        Ok(())
    }
}

fn encode<B: Serialize + ?Sized>(payload: &B) -> ClientResult<serde_json::Value> {
    serde_json::to_value(payload).map_err(|e| ApiClientError::Decode {
        message: format!("failed to serialize request payload: {e}"),
    })
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> ClientResult<T> {
    serde_json::from_slice(body).map_err(|e| ApiClientError::Decode {
        message: format!("failed to decode response body: {e}"),
    })
}
