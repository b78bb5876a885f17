//! CLI command implementations.

pub mod dashboard;
pub mod order;
pub mod storefront;

use shopfront_client::{ApiClient, CacheStore, ClientConfig};

/// Build a cache and client from the environment.
pub fn build_client() -> Result<(CacheStore, ApiClient), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let cache = CacheStore::new();
    let client = ApiClient::new(&config, cache.clone())?;
    Ok((cache, client))
}
