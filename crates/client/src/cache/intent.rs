//! Intents: the only way to mutate the cache.
//!
//! Each variant carries at most one payload value and targets exactly one
//! slice, except the compound clears at the bottom which model logout and
//! store deletion as single atomic dispatches. The enum is closed, so the
//! source system's "unrecognized intents are no-ops" rule holds trivially:
//! an unrecognized intent cannot be constructed.

use shopfront_core::{OrderId, ProductId, ReviewId};

use crate::models::{Order, Product, Review, SessionUser, Store, User};

/// A discrete request to mutate the cache.
///
/// Collection `Add`/`Update` variants both preserve id uniqueness: `Add`
/// replaces an existing record with the same id, `Update` appends when the
/// id is absent. `Update` replaces records wholesale, never field by field.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    // Session (singleton)
    SetSession(SessionUser),
    ClearSession,

    // Store (singleton - the current owner's store)
    SetStore(Store),
    ClearStore,

    // Products
    SetProducts(Vec<Product>),
    AddProduct(Product),
    UpdateProduct(Product),
    RemoveProduct(ProductId),
    ClearProducts,

    // Orders
    SetOrders(Vec<Order>),
    AddOrder(Order),
    UpdateOrder(Order),
    RemoveOrder(OrderId),
    ClearOrders,

    // Reviews
    SetReviews(Vec<Review>),
    AddReview(Review),
    UpdateReview(Review),
    RemoveReview(ReviewId),
    ClearReviews,

    // Users (read-only directory)
    SetUsers(Vec<User>),
    /// Upsert a single directory entry fetched by id.
    SetUser(User),
    ClearUsers,

    // Uploaded image URL (singleton)
    SetUploadedImage(String),
    ClearUploadedImage,

    /// Logout: reset the session and every authenticated-scoped slice so no
    /// state leaks across identities.
    ClearAuthenticated,

    /// Store deletion: clear the store and everything scoped to it
    /// (products, orders, reviews, uploaded image). The session survives.
    ClearStoreData,
}
