//! BIG-IP iControl REST Client
//!
//! A Rust client library for the F5 BIG-IP iControl REST management API.
//! Resources are addressed generically by collection path and object name,
//! so one client serves every LTM, GTM, SYS, NET and vCMP collection.
//!
//! # Example
//!
//! ```no_run
//! use bigip_client::{BigIpClient, BigIpClientTrait, ConnectionConfig, ObjectName, ResourcePath};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConnectionConfig::new("bigip.example.com", "admin", "secret");
//! let client = BigIpClient::connect(&config).await?;
//!
//! let pool = ResourcePath::named("ltm/pool", ObjectName::partitioned("web", "Common"));
//! if !client.exists(&pool).await? {
//!     client
//!         .create(&pool, &serde_json::json!({ "loadBalancingMode": "round-robin" }))
//!         .await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Generic CRUD**: exists / load / create / modify / delete on any resource path
//! - **Authentication**: HTTP basic auth or token auth through a login provider
//! - **Mocking**: in-memory `MockBigIpClient` behind the `test-util` feature

pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod bigip_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::BigIpClient;
pub use common::{Auth, HttpClient};
pub use config::ConnectionConfig;
pub use error::BigIpError;
pub use models::*;
pub use bigip_trait::BigIpClientTrait;
#[cfg(feature = "test-util")]
pub use mock::{MockBigIpClient, MockCall};
