pub mod access_token_claims;
pub mod app_rules;
pub mod apps;
pub mod auth_servers;
pub mod legal_values;
pub(crate) mod resource_client;
pub mod roles;
pub mod scopes;
pub mod session_login_tokens;
pub mod smart_hooks;
pub mod user_mappings;
pub mod users;

pub use access_token_claims::*;
pub use app_rules::*;
pub use apps::*;
pub use auth_servers::*;
pub use legal_values::*;
pub use roles::*;
pub use scopes::*;
pub use session_login_tokens::*;
pub use smart_hooks::*;
pub use user_mappings::*;
pub use users::*;
