use crate::domain::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default whole-round-trip timeout applied when the config leaves it unset
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// API region, selecting the base URL host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Us,
    Eu,
}

impl Region {
    pub fn base_url(&self) -> &'static str {
        match self {
            Region::Us => "https://api.us.onelogin.com",
            Region::Eu => "https://api.eu.onelogin.com",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Us => write!(f, "us"),
            Region::Eu => write!(f, "eu"),
        }
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "us" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            _ => Err(format!("Invalid region: {s}")),
        }
    }
}

/// Client construction configuration.
///
/// Immutable after construction; held by the client for its lifetime.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub client_id: String,
    pub client_secret: String,
    pub region: Region,
    /// Overrides the region-derived base URL when set
    pub url: Option<String>,
    pub timeout_seconds: u64,
}

impl ClientConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            region: Region::Us,
            url: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// The region-specific host prefix all resource paths are relative to
    pub fn base_url(&self) -> String {
        self.url
            .as_deref()
            .unwrap_or_else(|| self.region.base_url())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn token_url(&self) -> String {
        format!("{}/auth/oauth2/v2/token", self.base_url())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.client_id.is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "client_id".to_string(),
            });
        }

        if self.client_secret.is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "client_secret".to_string(),
            });
        }

        if let Some(ref url) = self.url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    key: "url".to_string(),
                    message: "Must start with http:// or https://".to_string(),
                });
            }
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_seconds".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        use std::env;

        let client_id = env::var("ONELOGIN_CLIENT_ID").map_err(|_| ConfigError::MissingRequired {
            key: "ONELOGIN_CLIENT_ID".to_string(),
        })?;

        let client_secret = env::var("ONELOGIN_CLIENT_SECRET").map_err(|_| ConfigError::MissingRequired {
            key: "ONELOGIN_CLIENT_SECRET".to_string(),
        })?;

        let region = env::var("ONELOGIN_REGION")
            .unwrap_or_else(|_| "us".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: "ONELOGIN_REGION".to_string(),
                message: "Must be one of: us, eu".to_string(),
            })?;

        let timeout_seconds = match env::var("ONELOGIN_TIMEOUT_SECONDS") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "ONELOGIN_TIMEOUT_SECONDS".to_string(),
                message: "Must be a positive integer".to_string(),
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECONDS,
        };

        let config = Self {
            client_id,
            client_secret,
            region,
            url: env::var("ONELOGIN_URL").ok(),
            timeout_seconds,
        };

        config.validate()?;
        Ok(config)
    }
}
