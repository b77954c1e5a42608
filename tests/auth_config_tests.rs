use httpmock::prelude::*;
use onelogin_sdk::{
    AuthError, ClientConfig, ClientCredentialsTokenProvider, ConfigError, Region, TokenProvider,
};
use serde_json::json;
use std::sync::Mutex;

// Environment mutation is process-wide; serialize the env-touching tests.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[tokio::test]
async fn token_is_acquired_with_basic_auth_and_cached() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/auth/oauth2/v2/token")
                // base64("id:secret")
                .header("authorization", "Basic aWQ6c2VjcmV0")
                .json_body(json!({"grant_type": "client_credentials"}));
            then.status(200).json_body(json!({
                "access_token": "tok-1",
                "expires_in": 3600,
                "account_id": 555,
                "token_type": "bearer"
            }));
        })
        .await;

    let config = ClientConfig::new("id", "secret").with_url(server.base_url());
    let provider = ClientCredentialsTokenProvider::new(reqwest::Client::new(), &config);

    assert_eq!(provider.access_token().await.unwrap(), "tok-1");
    assert_eq!(provider.access_token().await.unwrap(), "tok-1");

    // Second call must come from the cache
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn expired_token_is_reacquired() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/oauth2/v2/token");
            then.status(200)
                .json_body(json!({"access_token": "tok", "expires_in": 0}));
        })
        .await;

    let config = ClientConfig::new("id", "secret").with_url(server.base_url());
    let provider = ClientCredentialsTokenProvider::new(reqwest::Client::new(), &config);

    provider.access_token().await.unwrap();
    provider.access_token().await.unwrap();

    mock.assert_hits_async(2).await;
}

#[tokio::test]
async fn rejected_credentials_surface_as_invalid_credentials() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/oauth2/v2/token");
            then.status(401)
                .json_body(json!({"message": "invalid client"}));
        })
        .await;

    let config = ClientConfig::new("id", "wrong").with_url(server.base_url());
    let provider = ClientCredentialsTokenProvider::new(reqwest::Client::new(), &config);

    match provider.access_token().await.unwrap_err() {
        AuthError::InvalidCredentials => {}
        other => panic!("expected InvalidCredentials, got {other:?}"),
    }
}

#[test]
fn region_selects_the_base_url() {
    assert_eq!(Region::Us.base_url(), "https://api.us.onelogin.com");
    assert_eq!(Region::Eu.base_url(), "https://api.eu.onelogin.com");
    assert_eq!("eu".parse::<Region>().unwrap(), Region::Eu);
    assert!("mars".parse::<Region>().is_err());
}

#[test]
fn config_defaults_and_overrides() {
    let config = ClientConfig::new("id", "secret");
    assert_eq!(config.timeout_seconds, 30);
    assert_eq!(config.base_url(), "https://api.us.onelogin.com");
    assert_eq!(
        config.token_url(),
        "https://api.us.onelogin.com/auth/oauth2/v2/token"
    );

    let config = ClientConfig::new("id", "secret")
        .with_region(Region::Eu)
        .with_url("http://localhost:8080/")
        .with_timeout(5);
    assert_eq!(config.base_url(), "http://localhost:8080");
    assert_eq!(config.timeout_seconds, 5);
}

#[test]
fn config_validation_rejects_missing_and_invalid_values() {
    match ClientConfig::new("", "secret").validate().unwrap_err() {
        ConfigError::MissingRequired { key } => assert_eq!(key, "client_id"),
        other => panic!("unexpected error: {other:?}"),
    }

    match ClientConfig::new("id", "").validate().unwrap_err() {
        ConfigError::MissingRequired { key } => assert_eq!(key, "client_secret"),
        other => panic!("unexpected error: {other:?}"),
    }

    match ClientConfig::new("id", "secret")
        .with_url("ftp://example.com")
        .validate()
        .unwrap_err()
    {
        ConfigError::InvalidValue { key, .. } => assert_eq!(key, "url"),
        other => panic!("unexpected error: {other:?}"),
    }

    match ClientConfig::new("id", "secret")
        .with_timeout(0)
        .validate()
        .unwrap_err()
    {
        ConfigError::InvalidValue { key, .. } => assert_eq!(key, "timeout_seconds"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn config_loads_from_environment() {
    let _guard = ENV_LOCK.lock().unwrap();

    std::env::set_var("ONELOGIN_CLIENT_ID", "env-id");
    std::env::set_var("ONELOGIN_CLIENT_SECRET", "env-secret");
    std::env::set_var("ONELOGIN_REGION", "eu");
    std::env::set_var("ONELOGIN_TIMEOUT_SECONDS", "7");
    std::env::remove_var("ONELOGIN_URL");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.client_id, "env-id");
    assert_eq!(config.client_secret, "env-secret");
    assert_eq!(config.region, Region::Eu);
    assert_eq!(config.timeout_seconds, 7);
    assert_eq!(config.base_url(), "https://api.eu.onelogin.com");

    std::env::remove_var("ONELOGIN_CLIENT_ID");
    std::env::remove_var("ONELOGIN_CLIENT_SECRET");
    std::env::remove_var("ONELOGIN_REGION");
    std::env::remove_var("ONELOGIN_TIMEOUT_SECONDS");
}

#[test]
fn config_from_env_requires_credentials() {
    let _guard = ENV_LOCK.lock().unwrap();

    std::env::remove_var("ONELOGIN_CLIENT_ID");
    std::env::remove_var("ONELOGIN_CLIENT_SECRET");

    match ClientConfig::from_env().unwrap_err() {
        ConfigError::MissingRequired { key } => assert_eq!(key, "ONELOGIN_CLIENT_ID"),
        other => panic!("unexpected error: {other:?}"),
    }
}
