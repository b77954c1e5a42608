/*!
# OneLogin SDK

Typed client SDK for the OneLogin identity-management REST API, built with
hexagonal architecture principles.

This crate provides:
- Per-resource services (apps, users, roles, auth servers, scopes, smart
  hooks, session login tokens, app rules, user mappings, legal values)
- Port definitions for the shared request executor and token supply
- Infrastructure adapters backed by `reqwest`

## Architecture

```text
┌─────────────────────────────────────────────────────────────┐
│                       Client                                │
│  apps · users · roles · auth_servers · scopes · hooks · …   │
└─────────────────────────────────────────────────────────────┘
                              │
┌─────────────────────────────────────────────────────────────┐
│                Application Layer (Services)                 │
│  thin typed facades over one generic ResourceClient         │
└─────────────────────────────────────────────────────────────┘
                              │
┌─────────────────────────────────────────────────────────────┐
│                  Ports                                      │
│  ResourceExecutor · TokenProvider · ClientConfig            │
└─────────────────────────────────────────────────────────────┘
                              │
┌─────────────────────────────────────────────────────────────┐
│              Infrastructure (Adapters)                      │
│  RestExecutor · ClientCredentialsTokenProvider              │
└─────────────────────────────────────────────────────────────┘
```

## Usage

```rust,no_run
use onelogin_sdk::{Client, ClientConfig, Region, UserQuery};

# async fn run() -> Result<(), onelogin_sdk::ApiClientError> {
let client = Client::new(
    ClientConfig::new("client-id", "client-secret").with_region(Region::Us),
)?;

let users = client
    .users
    .list(&UserQuery::new().with_limit(10))
    .await?;
# Ok(())
# }
```

Every call is a single authenticated round trip. The SDK never retries;
`ApiClientError::is_retryable()` tells the embedding application whether a
retry of its own could help.
*/

pub mod application;
pub mod client;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::ports::*;
pub use application::services::*;
pub use client::Client;
pub use domain::entities::*;
pub use domain::errors::*;
pub use infrastructure::adapters::*;
