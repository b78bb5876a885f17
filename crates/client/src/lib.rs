//! Shopfront client library.
//!
//! A headless client for the Shopfront REST API: one in-memory cache
//! mirroring server-held entities, asynchronous coordinators keeping that
//! cache consistent with the server, and a navigation guard deciding which
//! views are reachable from the cache's current contents.
//!
//! # Architecture
//!
//! - [`cache`] - the single [`cache::CacheStore`], mutated only through
//!   dispatched [`cache::Intent`]s reduced by a pure function
//! - [`api`] - one [`api::ApiClient`] coordinator method per REST operation;
//!   every outcome normalizes to `Result<_, `[`error::ApiError`]`>`
//! - [`guard`] - the `Loading -> Unauthenticated | Authenticated` machine and
//!   the dashboard store-presence refinement
//! - [`public_order`] - the unauthenticated storefront browse-and-order flow
//!
//! # Example
//!
//! ```rust,no_run
//! use shopfront_client::{ApiClient, CacheStore, ClientConfig, Credentials, Guard, RouteClass};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let cache = CacheStore::new();
//! let client = ApiClient::new(&config, cache.clone())?;
//!
//! let guard = Guard::new(cache.clone());
//! guard.resolve(&client).await?;
//!
//! if guard.decide(RouteClass::Protected) == shopfront_client::GuardDecision::RedirectToLogin {
//!     client
//!         .login(&Credentials {
//!             email: "demo@example.com".into(),
//!             password: "password123".into(),
//!         })
//!         .await?;
//! }
//!
//! client.fetch_my_store().await?;
//! client.fetch_my_products().await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod public_order;

pub use api::{ApiClient, Credentials, ProductDraft, PublicOrderDraft, ReviewDraft, StoreDraft};
pub use cache::{CacheStore, Intent, Snapshot};
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, FieldErrors, GENERIC_FAILURE};
pub use guard::{AuthPhase, Guard, GuardDecision, RouteClass};
pub use public_order::{OrderDraft, PublicOrderFlow, StorefrontState};
