//! Store coordinators: the owner's storefront, plus the public snapshot.

use serde::Serialize;
use tracing::instrument;

use crate::cache::Intent;
use crate::error::ApiError;
use crate::models::{PublicStorefront, Store};

use super::{ApiClient, unwrap_entity};

/// Fields for creating or updating the owner's store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiClient {
    /// Fetch the current owner's store.
    ///
    /// `Ok(None)` means the owner has no storefront yet - a valid state the
    /// dashboard guard turns into a redirect to store creation. The store
    /// slice is cleared in that case so stale records cannot linger.
    ///
    /// # Errors
    ///
    /// Server and network failures only; absence is not an error.
    #[instrument(skip_all)]
    pub async fn fetch_my_store(&self) -> Result<Option<Store>, ApiError> {
        match self.execute(self.http().get(self.url("/api/stores/me"))).await {
            Ok(value) => {
                let store: Store = unwrap_entity(&value, "store")?;
                self.dispatch(Intent::SetStore(store.clone()));
                Ok(Some(store))
            }
            Err(ApiError::NotFound(_)) => {
                self.dispatch(Intent::ClearStore);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Create the owner's store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the fields are rejected or a
    /// store already exists for this owner.
    #[instrument(skip_all, fields(name = %draft.name))]
    pub async fn create_my_store(&self, draft: &StoreDraft) -> Result<Store, ApiError> {
        let value = self
            .execute(self.http().post(self.url("/api/stores")).json(draft))
            .await?;
        let store: Store = unwrap_entity(&value, "store")?;
        self.dispatch(Intent::SetStore(store.clone()));
        Ok(store)
    }

    /// Update the owner's store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for rejected fields.
    #[instrument(skip_all, fields(name = %draft.name))]
    pub async fn update_my_store(&self, draft: &StoreDraft) -> Result<Store, ApiError> {
        let value = self
            .execute(self.http().put(self.url("/api/stores/me")).json(draft))
            .await?;
        let store: Store = unwrap_entity(&value, "store")?;
        self.dispatch(Intent::SetStore(store.clone()));
        Ok(store)
    }

    /// Delete the owner's store.
    ///
    /// Clears the store and everything scoped to it (products, orders,
    /// reviews, uploaded image) in one dispatch; the session survives, and
    /// the dashboard guard degrades to the store-creation redirect.
    ///
    /// # Errors
    ///
    /// Returns the server's error; the cache is untouched on failure.
    #[instrument(skip_all)]
    pub async fn delete_my_store(&self) -> Result<(), ApiError> {
        self.execute(self.http().delete(self.url("/api/stores/me")))
            .await?;
        self.dispatch(Intent::ClearStoreData);
        Ok(())
    }

    /// Fetch the public `{store, products}` snapshot for a storefront.
    ///
    /// Unauthenticated: rides the credential-free client and never touches
    /// the cache - the result is flow-local to the public order flow.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no store has that name; server and
    /// network failures otherwise.
    #[instrument(skip_all, fields(store = %store_name))]
    pub async fn fetch_public_storefront(
        &self,
        store_name: &str,
    ) -> Result<PublicStorefront, ApiError> {
        let value = self
            .execute(
                self.public()
                    .get(self.url(&format!("/api/public/stores/{store_name}"))),
            )
            .await?;
        serde_json::from_value(value).map_err(|e| {
            tracing::error!(error = %e, "failed to decode public storefront");
            ApiError::generic_server()
        })
    }
}
