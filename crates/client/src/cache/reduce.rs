//! The pure reducer: (snapshot, intent) -> snapshot.

use super::intent::Intent;
use super::snapshot::Snapshot;

/// Apply one intent to a snapshot, producing the next snapshot.
///
/// Pure and total: no I/O, no panics, every intent maps to exactly one
/// deterministic result. Collection mutations preserve server-returned order
/// and id uniqueness.
#[must_use]
pub fn reduce(mut snapshot: Snapshot, intent: Intent) -> Snapshot {
    match intent {
        Intent::SetSession(user) => snapshot.session = Some(user),
        Intent::ClearSession => snapshot.session = None,

        Intent::SetStore(store) => snapshot.store = Some(store),
        Intent::ClearStore => snapshot.store = None,

        Intent::SetProducts(products) => snapshot.products = products,
        Intent::AddProduct(product) | Intent::UpdateProduct(product) => {
            upsert(&mut snapshot.products, product, |p| p.id);
        }
        Intent::RemoveProduct(id) => snapshot.products.retain(|p| p.id != id),
        Intent::ClearProducts => snapshot.products.clear(),

        Intent::SetOrders(orders) => snapshot.orders = orders,
        Intent::AddOrder(order) | Intent::UpdateOrder(order) => {
            upsert(&mut snapshot.orders, order, |o| o.id);
        }
        Intent::RemoveOrder(id) => snapshot.orders.retain(|o| o.id != id),
        Intent::ClearOrders => snapshot.orders.clear(),

        Intent::SetReviews(reviews) => snapshot.reviews = reviews,
        Intent::AddReview(review) | Intent::UpdateReview(review) => {
            upsert(&mut snapshot.reviews, review, |r| r.id);
        }
        Intent::RemoveReview(id) => snapshot.reviews.retain(|r| r.id != id),
        Intent::ClearReviews => snapshot.reviews.clear(),

        Intent::SetUsers(users) => snapshot.users = users,
        Intent::SetUser(user) => upsert(&mut snapshot.users, user, |u| u.id),
        Intent::ClearUsers => snapshot.users.clear(),

        Intent::SetUploadedImage(url) => snapshot.uploaded_image_url = Some(url),
        Intent::ClearUploadedImage => snapshot.uploaded_image_url = None,

        // Every slice is authenticated-scoped, so logout is a full reset.
        Intent::ClearAuthenticated => snapshot = Snapshot::default(),

        Intent::ClearStoreData => {
            snapshot.store = None;
            snapshot.products.clear();
            snapshot.orders.clear();
            snapshot.reviews.clear();
            snapshot.uploaded_image_url = None;
        }
    }
    snapshot
}

/// Replace the record with a matching id, or append.
fn upsert<T, I: PartialEq>(items: &mut Vec<T>, item: T, id_of: impl Fn(&T) -> I) {
    let id = id_of(&item);
    match items.iter_mut().find(|existing| id_of(existing) == id) {
        Some(slot) => *slot = item,
        None => items.push(item),
    }
}
