use super::common::{push_param, ExtraFields, Paging};
use serde::{Deserialize, Serialize};

/// An API authorization server protected by the identity provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthServer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<AuthServerConfiguration>,
    #[serde(flatten, skip_serializing_if = "ExtraFields::is_empty")]
    pub extra: ExtraFields,
}

/// Token issuance settings of an authorization server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthServerConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audiences: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_expiration_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token_expiration_minutes: Option<i32>,
}

/// Filter for listing authorization servers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthServerQuery {
    pub paging: Paging,
    pub name: Option<String>,
}

impl AuthServerQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn as_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        self.paging.append_to(&mut params);
        push_param(&mut params, "name", self.name.as_ref());
        params
    }
}
