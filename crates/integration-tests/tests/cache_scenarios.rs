//! Scenario tests for cache slices across login, catalog work, and logout.
//!
//! Coordinator effects are simulated by dispatching the same intents the
//! coordinators dispatch after a successful response, so these run without a
//! server.

use shopfront_client::models::User;
use shopfront_client::{CacheStore, Intent, Snapshot};
use shopfront_core::{Email, ProductId, UserId};
use shopfront_integration_tests::{demo_store, demo_user, product};

// =============================================================================
// Login
// =============================================================================

/// Login with `demo@example.com` succeeds server-side; the session slice
/// holds exactly that user afterwards.
#[test]
fn test_login_populates_session_slice() {
    let cache = CacheStore::new();
    assert!(!cache.snapshot().is_authenticated());

    cache.dispatch(Intent::SetSession(demo_user()));

    let snapshot = cache.snapshot();
    let session = snapshot.session.as_ref().expect("session populated");
    assert_eq!(session.email.as_str(), "demo@example.com");
    assert_eq!(session.id, UserId::new(1));
}

// =============================================================================
// Catalog
// =============================================================================

/// Creating a product grows the products slice by exactly one and the new
/// record is present by title.
#[test]
fn test_create_product_grows_slice_by_one() {
    let cache = CacheStore::new();
    cache.dispatch(Intent::SetProducts(vec![
        product(1, "Bowl", true),
        product(2, "Pot", true),
    ]));
    let before = cache.snapshot().products.len();

    cache.dispatch(Intent::AddProduct(product(3, "Mug", true)));

    let snapshot = cache.snapshot();
    assert_eq!(snapshot.products.len(), before + 1);
    assert!(snapshot.products.iter().any(|p| p.title == "Mug"));
    // Pre-existing records untouched
    assert!(snapshot.products.iter().any(|p| p.title == "Bowl"));
}

/// A create-product response in the server's wire shape decodes and lands in
/// the slice: `{title: "Mug", price: 9.99, in_stock: true}` grows the
/// catalog by one.
#[test]
fn test_created_product_decodes_from_wire_shape() {
    let body = r#"{
        "id": 7,
        "store_id": 1,
        "title": "Mug",
        "price": "9.99",
        "description": null,
        "image_url": null,
        "tags": [],
        "in_stock": true
    }"#;
    let created: shopfront_client::models::Product =
        serde_json::from_str(body).expect("wire shape decodes");

    let cache = CacheStore::new();
    let snapshot = cache.dispatch(Intent::AddProduct(created));
    assert_eq!(snapshot.products.len(), 1);
    assert_eq!(snapshot.products.first().map(|p| p.title.as_str()), Some("Mug"));
}

/// A refetch of the full catalog is idempotent.
#[test]
fn test_refetch_is_idempotent() {
    let cache = CacheStore::new();
    let catalog = vec![product(1, "Bowl", true), product(2, "Pot", false)];
    let once = cache.dispatch(Intent::SetProducts(catalog.clone()));
    let twice = cache.dispatch(Intent::SetProducts(catalog));
    assert_eq!(once, twice);
}

// =============================================================================
// Logout
// =============================================================================

/// Logout resets every slice to its initial value regardless of prior
/// contents: nothing may leak across identities.
#[test]
fn test_logout_clears_all_authenticated_slices() {
    let cache = CacheStore::new();
    cache.dispatch(Intent::SetSession(demo_user()));
    cache.dispatch(Intent::SetStore(demo_store()));
    cache.dispatch(Intent::SetProducts(vec![product(1, "Mug", true)]));
    cache.dispatch(Intent::SetUsers(vec![User {
        id: UserId::new(9),
        email: Email::parse("other@example.com").expect("fixture email"),
    }]));
    cache.dispatch(Intent::SetUploadedImage("/uploads/logo.png".to_owned()));

    let snapshot = cache.dispatch(Intent::ClearAuthenticated);

    assert_eq!(snapshot, Snapshot::default());
    assert_eq!(cache.snapshot(), Snapshot::default());
}

/// Store deletion clears the store and its dependents but keeps the session:
/// the owner lands on the store-creation form, still logged in, with the
/// empty state re-displayed.
#[test]
fn test_store_deletion_clears_store_scoped_slices() {
    let cache = CacheStore::new();
    cache.dispatch(Intent::SetSession(demo_user()));
    cache.dispatch(Intent::SetStore(demo_store()));
    cache.dispatch(Intent::SetProducts(vec![product(1, "Mug", true)]));

    let snapshot = cache.dispatch(Intent::ClearStoreData);

    assert!(snapshot.is_authenticated());
    assert!(!snapshot.has_store());
    assert!(snapshot.products.is_empty());
    assert!(snapshot.orders.is_empty());
}

// =============================================================================
// Concurrent coordinators
// =============================================================================

/// Three parallel fetches (store, products, users) land in any order; the
/// final snapshot is the same because each mutates a disjoint slice.
#[test]
fn test_disjoint_slice_dispatches_are_order_independent() {
    let intents = || {
        [
            Intent::SetStore(demo_store()),
            Intent::SetProducts(vec![product(1, "Mug", true)]),
            Intent::SetUsers(vec![User {
                id: UserId::new(9),
                email: Email::parse("other@example.com").expect("fixture email"),
            }]),
        ]
    };

    let forward = CacheStore::new();
    for intent in intents() {
        forward.dispatch(intent);
    }

    let reverse = CacheStore::new();
    for intent in intents().into_iter().rev() {
        reverse.dispatch(intent);
    }

    assert_eq!(forward.snapshot(), reverse.snapshot());
}

/// Overlapping requests to the same operation: the later response wins the
/// whole slice.
#[test]
fn test_same_slice_follows_last_response_wins() {
    let cache = CacheStore::new();
    cache.dispatch(Intent::SetProducts(vec![product(1, "Mug", true)]));
    cache.dispatch(Intent::SetProducts(vec![product(2, "Pot", true)]));

    let snapshot = cache.snapshot();
    assert_eq!(snapshot.products.len(), 1);
    assert_eq!(snapshot.products.first().map(|p| p.id), Some(ProductId::new(2)));
}
