use super::common::{push_param, ExtraFields, Paging};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// An application configured in the identity provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct App {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_method: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_assumed_signin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning: Option<AppProvisioning>,
    /// Connector-specific settings; shapes vary per connector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, AppParameter>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub role_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten, skip_serializing_if = "ExtraFields::is_empty")]
    pub extra: ExtraFields,
}

/// Provisioning state for an app
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppProvisioning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// A single parameter mapped between the identity provider and the app
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attribute_mappings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attribute_macros: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_transformations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_values: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_if_blank: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_entitlements: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

/// Filter for listing apps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppQuery {
    pub paging: Paging,
    pub name: Option<String>,
    pub connector_id: Option<i64>,
    pub auth_method: Option<i32>,
}

impl AppQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.paging.limit = Some(limit);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_connector_id(mut self, connector_id: i64) -> Self {
        self.connector_id = Some(connector_id);
        self
    }

    pub fn as_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        self.paging.append_to(&mut params);
        push_param(&mut params, "name", self.name.as_ref());
        push_param(&mut params, "connector_id", self.connector_id);
        push_param(&mut params, "auth_method", self.auth_method);
        params
    }
}
