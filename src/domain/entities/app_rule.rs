use super::common::{push_param, ExtraFields, Paging, RuleAction, RuleCondition};
use serde::{Deserialize, Serialize};

/// A provisioning/entitlement rule attached to an app
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<RuleCondition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<RuleAction>,
    #[serde(flatten, skip_serializing_if = "ExtraFields::is_empty")]
    pub extra: ExtraFields,
}

/// Filter for listing the rules of an app
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppRuleQuery {
    pub paging: Paging,
    pub enabled: Option<bool>,
    pub has_condition: Option<String>,
    pub has_action: Option<String>,
}

impl AppRuleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn as_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        self.paging.append_to(&mut params);
        push_param(&mut params, "enabled", self.enabled);
        push_param(&mut params, "has_condition", self.has_condition.as_ref());
        push_param(&mut params, "has_action", self.has_action.as_ref());
        params
    }
}
