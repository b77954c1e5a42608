pub mod access_token_claim;
pub mod app;
pub mod app_rule;
pub mod auth_server;
pub mod common;
pub mod legal_value;
pub mod role;
pub mod scope;
pub mod session_login_token;
pub mod smart_hook;
pub mod user;
pub mod user_mapping;

pub use access_token_claim::*;
pub use app::*;
pub use app_rule::*;
pub use auth_server::*;
pub use common::*;
pub use legal_value::*;
pub use role::*;
pub use scope::*;
pub use session_login_token::*;
pub use smart_hook::*;
pub use user::*;
pub use user_mapping::*;
