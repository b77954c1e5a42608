use super::common::{ExtraFields, Paging};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A serverless hook executed by the identity provider at defined events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmartHook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub hook_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Base64-encoded hook source, exactly as the API transports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env_vars: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SmartHookOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten, skip_serializing_if = "ExtraFields::is_empty")]
    pub extra: ExtraFields,
}

/// Context enrichment toggles passed to the hook runtime
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmartHookOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_device_info_enabled: Option<bool>,
}

/// Filter for listing hooks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmartHookQuery {
    pub paging: Paging,
}

impl SmartHookQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        self.paging.append_to(&mut params);
        params
    }
}
