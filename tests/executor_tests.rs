use httpmock::prelude::*;
use onelogin_sdk::{
    ApiClientError, App, Method, ResourceExecutor, ResourceRequest, RestExecutor,
    StaticTokenProvider, User,
};
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn executor() -> RestExecutor {
    executor_with_timeout(Duration::from_secs(5))
}

fn executor_with_timeout(timeout: Duration) -> RestExecutor {
    let http = reqwest::Client::builder().timeout(timeout).build().unwrap();
    RestExecutor::new(http, Arc::new(StaticTokenProvider::new("test-token")))
}

#[tokio::test]
async fn get_on_2xx_returns_raw_body_for_caller_decode() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/2/users")
                .query_param("limit", "10")
                .header("authorization", "bearer test-token");
            then.status(200).body(r#"[{"id":1,"username":"a"}]"#);
        })
        .await;

    let request = ResourceRequest::get(format!("{}/api/2/users", server.base_url()))
        .with_query(vec![("limit".to_string(), "10".to_string())]);
    let response = executor().execute(request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 200);

    let users: Vec<User> = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, Some(1));
    assert_eq!(users[0].username.as_deref(), Some("a"));
}

#[tokio::test]
async fn every_supported_method_maps_to_its_http_verb() {
    let server = MockServer::start_async().await;

    for (method, verb) in [
        (Method::Get, GET),
        (Method::Post, POST),
        (Method::Put, PUT),
        (Method::Delete, DELETE),
    ] {
        let path = format!("/verbs/{}", method.as_str().to_lowercase());
        let mock = server
            .mock_async(|when, then| {
                when.method(verb).path(path.clone());
                then.status(200).body("{}");
            })
            .await;

        let request = ResourceRequest::new(method, format!("{}{}", server.base_url(), path));
        executor().execute(request).await.unwrap();
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn query_parameters_arrive_as_sent() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/1/roles")
                .query_param("limit", "5")
                .query_param("name", "ops team");
            then.status(200).body("[]");
        })
        .await;

    let request = ResourceRequest::get(format!("{}/api/1/roles", server.base_url())).with_query(
        vec![
            ("limit".to_string(), "5".to_string()),
            ("name".to_string(), "ops team".to_string()),
        ],
    );
    executor().execute(request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn structured_error_body_surfaces_code_and_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/2/users/999");
            then.status(404)
                .body(r#"{"statusCode":404,"code":"not_found","message":"user not found"}"#);
        })
        .await;

    let request = ResourceRequest::get(format!("{}/api/2/users/999", server.base_url()));
    let err = executor().execute(request).await.unwrap_err();

    match err {
        ApiClientError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 404);
            assert_eq!(code.as_deref(), Some("not_found"));
            assert_eq!(message.as_deref(), Some("user not found"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(!ApiClientError::Api {
        status: 404,
        code: None,
        message: None
    }
    .is_retryable());
}

#[tokio::test]
async fn unparseable_error_body_still_carries_the_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/2/apps");
            then.status(502).body("<html>bad gateway</html>");
        })
        .await;

    let request = ResourceRequest::get(format!("{}/api/2/apps", server.base_url()));
    let err = executor().execute(request).await.unwrap_err();

    match &err {
        ApiClientError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(*status, 502);
            assert_eq!(*code, None);
            assert_eq!(message.as_deref(), Some("<html>bad gateway</html>"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn posted_body_round_trips_through_typed_decode() {
    let server = MockServer::start_async().await;
    let payload = json!({
        "name": "payroll",
        "connector_id": 12,
        "visible": true
    });
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/2/apps")
                .header("content-type", "application/json")
                .json_body(payload.clone());
            then.status(201).json_body(payload.clone());
        })
        .await;

    let original: App = serde_json::from_value(payload.clone()).unwrap();
    let request = ResourceRequest::post(format!("{}/api/2/apps", server.base_url()))
        .with_body(serde_json::to_value(&original).unwrap());
    let response = executor().execute(request).await.unwrap();

    let created: App = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(created, original);
}

#[tokio::test]
async fn timeout_surfaces_as_transport_error_within_bounds() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/2/users");
            then.status(200).body("[]").delay(Duration::from_secs(10));
        })
        .await;

    let request = ResourceRequest::get(format!("{}/api/2/users", server.base_url()));
    let started = Instant::now();
    let err = executor_with_timeout(Duration::from_secs(1))
        .execute(request)
        .await
        .unwrap_err();
    let elapsed = started.elapsed();

    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert!(err.is_retryable());
    assert!(
        elapsed < Duration::from_secs(3),
        "timed out too late: {elapsed:?}"
    );
}

#[tokio::test]
async fn concurrent_callers_each_receive_their_own_response() {
    let server = MockServer::start_async().await;
    for i in 0..50 {
        server
            .mock_async(|when, then| {
                when.method(GET).path(format!("/echo/{i}"));
                then.status(200).body(format!(r#"{{"id":{i}}}"#));
            })
            .await;
    }

    let executor = Arc::new(executor());
    let base_url = server.base_url();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let executor = executor.clone();
            let url = format!("{base_url}/echo/{i}");
            tokio::spawn(async move {
                let response = executor.execute(ResourceRequest::get(url)).await.unwrap();
                let value: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
                assert_eq!(value["id"], i);
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }
}
