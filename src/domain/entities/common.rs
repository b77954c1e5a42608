use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Bag for response fields the schema does not yet model.
///
/// Flattened into every resource so the client tolerates additions to the
/// remote contract without a schema update.
pub type ExtraFields = HashMap<String, Value>;

/// A condition evaluated by an app rule or user mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleCondition {
    pub source: String,
    pub operator: String,
    pub value: String,
}

/// An action performed when a rule or mapping matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleAction {
    pub action: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

/// Common cursor/limit paging fields shared by the list query types
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paging {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub cursor: Option<String>,
}

impl Paging {
    pub(crate) fn append_to(&self, params: &mut Vec<(String, String)>) {
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        if let Some(ref cursor) = self.cursor {
            params.push(("cursor".to_string(), cursor.clone()));
        }
    }
}

pub(crate) fn push_param(
    params: &mut Vec<(String, String)>,
    key: &str,
    value: Option<impl ToString>,
) {
    if let Some(value) = value {
        params.push((key.to_string(), value.to_string()));
    }
}
