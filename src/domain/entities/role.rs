use super::common::{push_param, ExtraFields, Paging};
use serde::{Deserialize, Serialize};

/// A role grouping users and app assignments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub admins: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apps: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<i64>,
    #[serde(flatten, skip_serializing_if = "ExtraFields::is_empty")]
    pub extra: ExtraFields,
}

/// Filter for listing roles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleQuery {
    pub paging: Paging,
    pub name: Option<String>,
}

impl RoleQuery {
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

    pub fn as_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        self.paging.append_to(&mut params);
        push_param(&mut params, "name", self.name.as_ref());
        params
    }
}
