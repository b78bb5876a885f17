//! Product coordinators for the owner's catalog.

use serde::Serialize;
use shopfront_core::{Price, ProductId};
use tracing::instrument;

use crate::cache::Intent;
use crate::error::ApiError;
use crate::models::Product;

use super::{ApiClient, unwrap_entity};

/// Fields for creating or updating a product.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub in_stock: bool,
}

impl ApiClient {
    /// Fetch the owner's full catalog into the products slice.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the owner has no store yet.
    #[instrument(skip_all)]
    pub async fn fetch_my_products(&self) -> Result<Vec<Product>, ApiError> {
        let value = self.execute(self.http().get(self.url("/api/products"))).await?;
        let products: Vec<Product> = unwrap_entity(&value, "products")?;
        self.dispatch(Intent::SetProducts(products.clone()));
        Ok(products)
    }

    /// Create a product in the owner's store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for rejected fields (missing title,
    /// negative price).
    #[instrument(skip_all, fields(title = %draft.title))]
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        let value = self
            .execute(self.http().post(self.url("/api/products")).json(draft))
            .await?;
        let product: Product = unwrap_entity(&value, "product")?;
        self.dispatch(Intent::AddProduct(product.clone()));
        Ok(product)
    }

    /// Replace a product's fields wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for a product outside the owner's
    /// store, [`ApiError::Validation`] for rejected fields.
    #[instrument(skip_all, fields(product = %id))]
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, ApiError> {
        let value = self
            .execute(
                self.http()
                    .put(self.url(&format!("/api/products/{id}")))
                    .json(draft),
            )
            .await?;
        let product: Product = unwrap_entity(&value, "product")?;
        self.dispatch(Intent::UpdateProduct(product.clone()));
        Ok(product)
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for a product outside the owner's
    /// store.
    #[instrument(skip_all, fields(product = %id))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        self.execute(self.http().delete(self.url(&format!("/api/products/{id}"))))
            .await?;
        self.dispatch(Intent::RemoveProduct(id));
        Ok(())
    }
}
