use super::common::ExtraFields;
use serde::{Deserialize, Serialize};

/// A claim template stamped into tokens minted by an authorization server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessTokenClaim {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attribute_mappings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attribute_macros: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_transformations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_if_blank: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_values: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_entitlements: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    #[serde(flatten, skip_serializing_if = "ExtraFields::is_empty")]
    pub extra: ExtraFields,
}
