pub mod client_credentials;
pub mod rest_executor;
pub mod static_token;

pub use client_credentials::*;
pub use rest_executor::*;
pub use static_token::*;
