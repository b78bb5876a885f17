//! Order coordinators: the owner's order book, plus public order creation.

use serde::Serialize;
use shopfront_core::{OrderId, OrderStatus, ProductId};
use tracing::instrument;

use crate::cache::Intent;
use crate::error::ApiError;
use crate::models::Order;

use super::{ApiClient, unwrap_entity};

/// Payload for an unauthenticated buyer order against a public store.
#[derive(Debug, Clone, Serialize)]
pub struct PublicOrderDraft {
    pub buyer_name: String,
    pub buyer_email: String,
    pub product_ids: Vec<ProductId>,
}

#[derive(Serialize)]
struct StatusUpdate {
    status: OrderStatus,
}

impl ApiClient {
    /// Fetch all orders against the owner's store into the orders slice.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the owner has no store yet.
    #[instrument(skip_all)]
    pub async fn fetch_my_orders(&self) -> Result<Vec<Order>, ApiError> {
        let value = self.execute(self.http().get(self.url("/api/orders"))).await?;
        let orders: Vec<Order> = unwrap_entity(&value, "orders")?;
        self.dispatch(Intent::SetOrders(orders.clone()));
        Ok(orders)
    }

    /// Fetch one order and upsert it into the orders slice.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an order outside the owner's
    /// store.
    #[instrument(skip_all, fields(order = %id))]
    pub async fn fetch_order(&self, id: OrderId) -> Result<Order, ApiError> {
        let value = self
            .execute(self.http().get(self.url(&format!("/api/orders/{id}"))))
            .await?;
        let order: Order = unwrap_entity(&value, "order")?;
        self.dispatch(Intent::UpdateOrder(order.clone()));
        Ok(order)
    }

    /// Update an order's fulfillment status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an order outside the owner's
    /// store, [`ApiError::Validation`] for a rejected status.
    #[instrument(skip_all, fields(order = %id, status = %status))]
    pub async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        let value = self
            .execute(
                self.http()
                    .put(self.url(&format!("/api/orders/{id}")))
                    .json(&StatusUpdate { status }),
            )
            .await?;
        let order: Order = unwrap_entity(&value, "order")?;
        self.dispatch(Intent::UpdateOrder(order.clone()));
        Ok(order)
    }

    /// Delete an order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an order outside the owner's
    /// store.
    #[instrument(skip_all, fields(order = %id))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), ApiError> {
        self.execute(self.http().delete(self.url(&format!("/api/orders/{id}"))))
            .await?;
        self.dispatch(Intent::RemoveOrder(id));
        Ok(())
    }

    /// Create an order against a public store as an unauthenticated buyer.
    ///
    /// Rides the credential-free client and performs no dispatch: the
    /// created order belongs to the seller's order book, not to this
    /// visitor's cache.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] for an unknown store name,
    /// [`ApiError::Validation`] when the buyer fields or product ids are
    /// rejected.
    #[instrument(skip_all, fields(store = %store_name))]
    pub async fn create_public_order(
        &self,
        store_name: &str,
        draft: &PublicOrderDraft,
    ) -> Result<Order, ApiError> {
        let value = self
            .execute(
                self.public()
                    .post(self.url(&format!("/api/public/stores/{store_name}/orders")))
                    .json(draft),
            )
            .await?;
        unwrap_entity(&value, "order")
    }
}
