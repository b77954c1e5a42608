pub mod auth;
pub mod config;
pub mod http;

pub use auth::*;
pub use config::*;
pub use http::*;
