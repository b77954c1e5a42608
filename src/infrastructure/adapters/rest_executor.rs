use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::application::ports::{
    Method, ResourceExecutor, ResourceRequest, ResourceResponse, TokenProvider,
};
use crate::domain::errors::{ApiClientError, ClientResult};

const AFTER_CURSOR_HEADER: &str = "After-Cursor";

/// reqwest-backed request executor.
///
/// Performs exactly one round trip per call: fetch the current bearer
/// token, send, classify the outcome. Holds no per-call state, so a single
/// instance serves any number of concurrent callers; the whole-round-trip
/// timeout lives on the shared `reqwest::Client`.
pub struct RestExecutor {
    http: reqwest::Client,
    tokens: Arc<dyn TokenProvider>,
}

impl RestExecutor {
    pub fn new(http: reqwest::Client, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { http, tokens }
    }

    fn assemble(&self, request: &ResourceRequest, token: &str) -> ClientResult<reqwest::Request> {
        let mut builder = match request.method {
            Method::Get => self.http.get(&request.url),
            Method::Post => self.http.post(&request.url),
            Method::Put => self.http.put(&request.url),
            Method::Delete => self.http.delete(&request.url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = builder.header(AUTHORIZATION, format!("bearer {token}"));

        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        builder.build().map_err(transport_error)
    }
}

#[async_trait]
impl ResourceExecutor for RestExecutor {
    async fn execute(&self, request: ResourceRequest) -> ClientResult<ResourceResponse> {
        let token = self.tokens.access_token().await?;
        let assembled = self.assemble(&request, &token)?;

        debug!(method = %request.method, url = %assembled.url(), "executing API request");

        let response = self.http.execute(assembled).await.map_err(transport_error)?;

        let status = response.status();
        let after_cursor = response
            .headers()
            .get(AFTER_CURSOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await.map_err(transport_error)?.to_vec();

        if status.is_success() {
            Ok(ResourceResponse {
                status: status.as_u16(),
                body,
                after_cursor,
            })
        } else {
            Err(decode_api_error(status.as_u16(), &body))
        }
    }
}

fn transport_error(err: reqwest::Error) -> ApiClientError {
    ApiClientError::Transport {
        message: err.to_string(),
        timeout: err.is_timeout(),
    }
}

/// Error payload shape of the remote API. Decoded leniently: missing
/// fields are absent, not fatal.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default, deserialize_with = "code_as_string")]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// The API is inconsistent about whether `code` is a string or a number;
/// normalize both to a string.
fn code_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

fn decode_api_error(status: u16, body: &[u8]) -> ApiClientError {
    match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(parsed) => ApiClientError::Api {
            status,
            code: parsed.code,
            message: parsed.message,
        },
        // Undecodable body: keep the status and the raw text, nothing else
        Err(_) => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            ApiClientError::Api {
                status,
                code: None,
                message: if text.is_empty() { None } else { Some(text) },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::StaticTokenProvider;

    fn executor() -> RestExecutor {
        RestExecutor::new(
            reqwest::Client::new(),
            Arc::new(StaticTokenProvider::new("test-token")),
        )
    }

    #[test]
    fn query_parameters_encode_in_contract_order() {
        let request = ResourceRequest::get("https://api.example.com/api/2/users").with_query(vec![
            ("limit".to_string(), "10".to_string()),
            ("page".to_string(), "2".to_string()),
            ("username".to_string(), "a b".to_string()),
        ]);

        let assembled = executor().assemble(&request, "t").unwrap();
        assert_eq!(assembled.url().query(), Some("limit=10&page=2&username=a+b"));
    }

    #[test]
    fn bearer_header_uses_current_token() {
        let request = ResourceRequest::get("https://api.example.com/api/2/apps");
        let assembled = executor().assemble(&request, "abc123").unwrap();
        assert_eq!(
            assembled.headers().get(AUTHORIZATION).unwrap(),
            "bearer abc123"
        );
    }

    #[test]
    fn structured_error_body_decodes_code_and_message() {
        let body = br#"{"statusCode":404,"code":"not_found","message":"no such user"}"#;
        match decode_api_error(404, body) {
            ApiClientError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code.as_deref(), Some("not_found"));
                assert_eq!(message.as_deref(), Some("no such user"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn numeric_error_code_is_normalized() {
        let body = br#"{"code":401,"message":"unauthorized"}"#;
        match decode_api_error(401, body) {
            ApiClientError::Api { code, .. } => assert_eq!(code.as_deref(), Some("401")),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_body_falls_back_to_status_and_raw_text() {
        match decode_api_error(502, b"bad gateway") {
            ApiClientError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 502);
                assert_eq!(code, None);
                assert_eq!(message.as_deref(), Some("bad gateway"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn empty_error_body_keeps_only_the_status() {
        match decode_api_error(500, b"") {
            ApiClientError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 500);
                assert_eq!(code, None);
                assert_eq!(message, None);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
