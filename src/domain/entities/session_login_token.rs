use super::common::ExtraFields;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials submitted to create a session login token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionLoginTokenParams {
    pub username_or_email: String,
    pub password: String,
    pub subdomain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_to_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// A session login token issued for a successful (or MFA-pending) login
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionLoginToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_to_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    /// Present instead of session_token when MFA is required
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub devices: Vec<SessionDevice>,
    #[serde(flatten, skip_serializing_if = "ExtraFields::is_empty")]
    pub extra: ExtraFields,
}

/// The user an issued session token belongs to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}

/// An MFA device offered during a pending login
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
}
