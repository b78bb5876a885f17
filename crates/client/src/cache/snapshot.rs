//! The immutable view of the cache at one point in time.

use shopfront_core::{OrderId, ProductId, ReviewId};

use crate::models::{Order, Product, Review, SessionUser, Store, User};

/// One slice per entity family. Every slice starts empty and is populated,
/// replaced, or cleared only through dispatched intents; nothing here ever
/// expires on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// At most one authenticated user; `None` means unauthenticated.
    pub session: Option<SessionUser>,
    /// At most one record: the current owner's store.
    pub store: Option<Store>,
    /// The owner's catalog, in server-returned order.
    pub products: Vec<Product>,
    /// Orders against the owner's store, in server-returned order.
    pub orders: Vec<Order>,
    /// Reviews for the product last listed.
    pub reviews: Vec<Review>,
    /// Read-only user directory.
    pub users: Vec<User>,
    /// URL of the most recently uploaded image, for embedding in a store or
    /// product record.
    pub uploaded_image_url: Option<String>,
}

impl Snapshot {
    /// Whether a session is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the owner's store record is present.
    #[must_use]
    pub const fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Look up a product in the catalog slice.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up an order.
    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Look up a review.
    #[must_use]
    pub fn review(&self, id: ReviewId) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id == id)
    }
}
