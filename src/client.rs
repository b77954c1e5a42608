use std::sync::Arc;
use tracing::debug;

use crate::application::ports::{ClientConfig, ResourceExecutor, TokenProvider};
use crate::application::services::{
    AccessTokenClaimsService, AppRulesService, AppsService, AuthServersService,
    LegalValuesService, RolesService, ScopesService, SessionLoginTokensService,
    SmartHooksService, UserMappingsService, UsersService,
};
use crate::domain::errors::{ClientResult, ConfigError};
use crate::infrastructure::adapters::{ClientCredentialsTokenProvider, RestExecutor};

/// Top-level API client with all resource services attached.
///
/// One HTTP transport, one token provider and one executor are shared by
/// every service; the whole object is immutable after construction and
/// safe to share across tasks behind an `Arc`.
pub struct Client {
    config: ClientConfig,
    pub apps: AppsService,
    pub app_rules: AppRulesService,
    pub users: UsersService,
    pub user_mappings: UserMappingsService,
    pub roles: RolesService,
    pub auth_servers: AuthServersService,
    pub access_token_claims: AccessTokenClaimsService,
    pub scopes: ScopesService,
    pub smart_hooks: SmartHooksService,
    pub session_login_tokens: SessionLoginTokensService,
    pub legal_values: LegalValuesService,
}

impl Client {
    /// Build a client that authenticates with the client-credentials grant.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let http = build_http(&config)?;
        let tokens: Arc<dyn TokenProvider> =
            Arc::new(ClientCredentialsTokenProvider::new(http.clone(), &config));
        Self::assemble(config, http, tokens)
    }

    /// Build a client from `ONELOGIN_*` environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Build a client around an externally managed token supply.
    pub fn with_token_provider(
        config: ClientConfig,
        tokens: Arc<dyn TokenProvider>,
    ) -> ClientResult<Self> {
        config.validate()?;
        let http = build_http(&config)?;
        Self::assemble(config, http, tokens)
    }

    fn assemble(
        config: ClientConfig,
        http: reqwest::Client,
        tokens: Arc<dyn TokenProvider>,
    ) -> ClientResult<Self> {
        let base_url = config.base_url();
        let executor: Arc<dyn ResourceExecutor> = Arc::new(RestExecutor::new(http, tokens));

        debug!(%base_url, region = %config.region, "constructed API client");

        Ok(Self {
            apps: AppsService::new(executor.clone(), &base_url),
            app_rules: AppRulesService::new(executor.clone(), &base_url),
            users: UsersService::new(executor.clone(), &base_url),
            user_mappings: UserMappingsService::new(executor.clone(), &base_url),
            roles: RolesService::new(executor.clone(), &base_url),
            auth_servers: AuthServersService::new(executor.clone(), &base_url),
            access_token_claims: AccessTokenClaimsService::new(executor.clone(), &base_url),
            scopes: ScopesService::new(executor.clone(), &base_url),
            smart_hooks: SmartHooksService::new(executor.clone(), &base_url),
            session_login_tokens: SessionLoginTokensService::new(executor.clone(), &base_url),
            legal_values: LegalValuesService::new(executor, &base_url),
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

fn build_http(config: &ClientConfig) -> ClientResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.timeout())
        .build()
        .map_err(|e| {
            ConfigError::InvalidValue {
                key: "http_client".to_string(),
                message: format!("failed to initialize HTTP transport: {e}"),
            }
            .into()
        })
}
