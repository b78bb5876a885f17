//! Scenario tests for the Shopfront client.
//!
//! These tests exercise the cache, guard, and public order flow together
//! through the library's public API. They simulate coordinator effects by
//! dispatching the same intents the coordinators dispatch, so no server is
//! required.
//!
//! # Test Categories
//!
//! - `cache_scenarios` - login, product creation, and logout effects on slices
//! - `guard_scenarios` - the full redirect decision table
//! - `public_order_scenarios` - selection gating and client-side submission
//!   rejection

use rust_decimal::Decimal;
use shopfront_client::models::{Product, SessionUser, Store};
use shopfront_core::{Email, Price, ProductId, StoreId, UserId};

/// The seller used throughout the scenarios.
///
/// # Panics
///
/// Panics on an invalid fixture email (test-only code).
#[must_use]
pub fn demo_user() -> SessionUser {
    SessionUser {
        id: UserId::new(1),
        email: Email::parse("demo@example.com").expect("fixture email"),
    }
}

/// The seller's store.
#[must_use]
pub fn demo_store() -> Store {
    Store {
        id: StoreId::new(1),
        user_id: UserId::new(1),
        name: "mugs-r-us".to_owned(),
        logo_url: None,
        theme_color: Some("#336699".to_owned()),
        description: Some("Hand-thrown mugs.".to_owned()),
    }
}

/// A catalog product.
///
/// # Panics
///
/// Panics on an invalid fixture price (test-only code).
#[must_use]
pub fn product(id: i32, title: &str, in_stock: bool) -> Product {
    Product {
        id: ProductId::new(id),
        store_id: StoreId::new(1),
        title: title.to_owned(),
        price: Price::new(Decimal::new(999, 2)).expect("fixture price"),
        description: None,
        image_url: None,
        tags: vec!["kitchen".to_owned()],
        in_stock,
    }
}
