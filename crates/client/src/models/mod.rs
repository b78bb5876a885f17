//! Entity records as returned by the Shopfront REST API.
//!
//! These mirror the JSON wire shape one-to-one. Records are plain data: the
//! cache replaces them wholesale on update and never mutates fields in
//! place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shopfront_core::{
    Email, OrderId, OrderStatus, Price, ProductId, Rating, ReviewId, StoreId, UserId,
};

/// The authenticated user, held in the session slice.
///
/// At most one per client; absence means unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub email: Email,
}

/// A read-only user directory entry. Never mutated by this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
}

/// The seller's storefront.
///
/// The cache holds at most one record: the current owner's store. Absence is
/// a valid state (the owner has not created a storefront yet), distinct from
/// not-yet-fetched only at the coordinator level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub user_id: UserId,
    /// Unique slug, used in public URLs (`/store/{name}`).
    pub name: String,
    pub logo_url: Option<String>,
    pub theme_color: Option<String>,
    pub description: Option<String>,
}

/// A catalog product. Belongs to exactly one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub store_id: StoreId,
    pub title: String,
    pub price: Price,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Display tags, in server-returned order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Out-of-stock products cannot be selected in the public order flow.
    pub in_stock: bool,
}

/// A buyer order against a store, created by an unauthenticated visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub store_id: StoreId,
    pub buyer_name: String,
    pub buyer_email: Email,
    pub status: OrderStatus,
    /// Server-computed sum of the purchased products.
    pub total_price: Price,
    pub created_at: DateTime<Utc>,
    /// Purchased products, nested as the API returns them.
    pub products: Vec<Product>,
}

/// A product review. Belongs to exactly one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub rating: Rating,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The public `{store, products}` snapshot served to unauthenticated
/// visitors. Flow-local: never enters the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicStorefront {
    pub store: Store,
    pub products: Vec<Product>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_product_deserializes_wire_shape() {
        let json = r#"{
            "id": 3,
            "store_id": 1,
            "title": "Mug",
            "price": "9.99",
            "description": "A mug.",
            "image_url": null,
            "tags": ["kitchen", "ceramic"],
            "in_stock": true
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.price.amount(), Decimal::new(999, 2));
        assert_eq!(product.tags, vec!["kitchen", "ceramic"]);
        assert!(product.in_stock);
    }

    #[test]
    fn test_product_tags_default_empty() {
        let json = r#"{
            "id": 3,
            "store_id": 1,
            "title": "Mug",
            "price": "9.99",
            "description": null,
            "image_url": null,
            "in_stock": false
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.tags.is_empty());
    }

    #[test]
    fn test_order_deserializes_wire_shape() {
        let json = r#"{
            "id": 12,
            "store_id": 1,
            "buyer_name": "Ada",
            "buyer_email": "ada@example.com",
            "status": "pending",
            "total_price": "19.98",
            "created_at": "2025-11-02T10:30:00Z",
            "products": []
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.buyer_email.as_str(), "ada@example.com");
        assert!(order.products.is_empty());
    }

    #[test]
    fn test_public_storefront_deserializes() {
        let json = r##"{
            "store": {
                "id": 1,
                "user_id": 7,
                "name": "mugs-r-us",
                "logo_url": null,
                "theme_color": "#336699",
                "description": "Mugs."
            },
            "products": []
        }"##;
        let storefront: PublicStorefront = serde_json::from_str(json).unwrap();
        assert_eq!(storefront.store.name, "mugs-r-us");
    }
}
