//! The public order flow: an unauthenticated visitor browsing one store's
//! catalog and submitting an order.
//!
//! Everything here is flow-local. The fetched storefront and the visitor's
//! draft never enter the cache, and no request carries credentials.

use std::collections::BTreeSet;

use shopfront_core::ProductId;
use tracing::instrument;

use crate::api::{ApiClient, PublicOrderDraft};
use crate::error::{ApiError, FieldErrors};
use crate::models::{Order, Product, PublicStorefront};

/// The result of fetching a public storefront.
#[derive(Debug, Clone, PartialEq)]
pub enum StorefrontState {
    /// `load` has not been called, or not completed.
    Loading,
    /// No store has the requested name.
    NotFound,
    /// Server or network failure; the visitor may retry.
    Failed,
    Loaded(PublicStorefront),
}

/// The visitor's in-progress order: buyer fields plus a product selection.
///
/// Selection and validation are pure so the submission gate is testable
/// without a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub buyer_name: String,
    pub buyer_email: String,
    selected: BTreeSet<ProductId>,
}

impl OrderDraft {
    /// Toggle a product in the selection.
    ///
    /// Only products present in `catalog` with their in-stock flag set may
    /// be selected; deselection always succeeds. Returns whether the toggle
    /// was applied.
    pub fn toggle(&mut self, catalog: &[Product], id: ProductId) -> bool {
        if self.selected.remove(&id) {
            return true;
        }
        let selectable = catalog.iter().any(|p| p.id == id && p.in_stock);
        if selectable {
            self.selected.insert(id);
        }
        selectable
    }

    /// The selected product ids, in id order.
    #[must_use]
    pub fn selected(&self) -> Vec<ProductId> {
        self.selected.iter().copied().collect()
    }

    /// Whether a product is currently selected.
    #[must_use]
    pub fn is_selected(&self, id: ProductId) -> bool {
        self.selected.contains(&id)
    }

    /// Drop the whole selection (after a successful submission).
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Submission gate: non-empty buyer name, non-empty buyer email,
    /// non-empty selection.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// The field errors that currently block submission.
    #[must_use]
    pub fn missing_fields(&self) -> FieldErrors {
        let mut fields = FieldErrors::new();
        if self.buyer_name.trim().is_empty() {
            fields.insert("buyer_name".to_owned(), "Buyer name is required.".to_owned());
        }
        if self.buyer_email.trim().is_empty() {
            fields.insert("buyer_email".to_owned(), "Buyer email is required.".to_owned());
        }
        if self.selected.is_empty() {
            fields.insert(
                "products".to_owned(),
                "Select at least one product.".to_owned(),
            );
        }
        fields
    }
}

/// One visitor's session against one public storefront.
#[derive(Debug, Clone)]
pub struct PublicOrderFlow {
    client: ApiClient,
    store_name: String,
    storefront: StorefrontState,
    draft: OrderDraft,
}

impl PublicOrderFlow {
    /// Create a flow for the given store name. Call [`Self::load`] next.
    #[must_use]
    pub fn new(client: ApiClient, store_name: impl Into<String>) -> Self {
        Self {
            client,
            store_name: store_name.into(),
            storefront: StorefrontState::Loading,
            draft: OrderDraft::default(),
        }
    }

    /// Fetch the public `{store, products}` snapshot.
    #[instrument(skip_all, fields(store = %self.store_name))]
    pub async fn load(&mut self) -> &StorefrontState {
        self.storefront = match self.client.fetch_public_storefront(&self.store_name).await {
            Ok(storefront) => StorefrontState::Loaded(storefront),
            Err(ApiError::NotFound(_)) => StorefrontState::NotFound,
            Err(err) => {
                tracing::debug!(error = %err, "public storefront fetch failed");
                StorefrontState::Failed
            }
        };
        &self.storefront
    }

    /// The current fetch state.
    #[must_use]
    pub const fn storefront(&self) -> &StorefrontState {
        &self.storefront
    }

    /// The loaded catalog, or empty while not loaded.
    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        match &self.storefront {
            StorefrontState::Loaded(storefront) => &storefront.products,
            _ => &[],
        }
    }

    /// Case-insensitive title search over the loaded catalog.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.catalog()
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// The visitor's draft.
    #[must_use]
    pub const fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn set_buyer_name(&mut self, name: impl Into<String>) {
        self.draft.buyer_name = name.into();
    }

    pub fn set_buyer_email(&mut self, email: impl Into<String>) {
        self.draft.buyer_email = email.into();
    }

    /// Toggle a product against the loaded catalog. Out-of-stock and unknown
    /// products are refused.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        match &self.storefront {
            StorefrontState::Loaded(storefront) => self.draft.toggle(&storefront.products, id),
            _ => false,
        }
    }

    /// Whether submission is currently enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self.storefront, StorefrontState::Loaded(_)) && self.draft.is_complete()
    }

    /// Submit the order.
    ///
    /// The gate is re-checked first: an incomplete draft (or an unloaded
    /// storefront) is rejected client-side and no HTTP request is made. On
    /// success the selection is cleared and the created order returned.
    ///
    /// # Errors
    ///
    /// Client-side [`ApiError::Validation`] when the gate fails; otherwise
    /// whatever the create-public-order coordinator reports.
    #[instrument(skip_all, fields(store = %self.store_name))]
    pub async fn submit(&mut self) -> Result<Order, ApiError> {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            return Err(ApiError::Validation(missing));
        }
        if !matches!(self.storefront, StorefrontState::Loaded(_)) {
            return Err(ApiError::message("Storefront is not loaded."));
        }
        let payload = PublicOrderDraft {
            buyer_name: self.draft.buyer_name.trim().to_owned(),
            buyer_email: self.draft.buyer_email.trim().to_owned(),
            product_ids: self.draft.selected(),
        };
        let order = self
            .client
            .create_public_order(&self.store_name, &payload)
            .await?;
        self.draft.clear_selection();
        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use shopfront_core::{Price, StoreId};

    use super::*;

    fn product(id: i32, title: &str, in_stock: bool) -> Product {
        Product {
            id: ProductId::new(id),
            store_id: StoreId::new(1),
            title: title.to_owned(),
            price: Price::new(Decimal::new(999, 2)).unwrap(),
            description: None,
            image_url: None,
            tags: vec![],
            in_stock,
        }
    }

    #[test]
    fn test_toggle_selects_and_deselects() {
        let catalog = vec![product(1, "Mug", true)];
        let mut draft = OrderDraft::default();
        assert!(draft.toggle(&catalog, ProductId::new(1)));
        assert!(draft.is_selected(ProductId::new(1)));
        assert!(draft.toggle(&catalog, ProductId::new(1)));
        assert!(!draft.is_selected(ProductId::new(1)));
    }

    #[test]
    fn test_toggle_refuses_out_of_stock() {
        let catalog = vec![product(1, "Mug", false)];
        let mut draft = OrderDraft::default();
        assert!(!draft.toggle(&catalog, ProductId::new(1)));
        assert!(draft.selected().is_empty());
    }

    #[test]
    fn test_toggle_refuses_unknown_product() {
        let catalog = vec![product(1, "Mug", true)];
        let mut draft = OrderDraft::default();
        assert!(!draft.toggle(&catalog, ProductId::new(99)));
        assert!(draft.selected().is_empty());
    }

    #[test]
    fn test_deselect_survives_stock_change() {
        // A product selected while in stock can still be deselected after it
        // goes out of stock in a reloaded catalog.
        let mut draft = OrderDraft::default();
        assert!(draft.toggle(&[product(1, "Mug", true)], ProductId::new(1)));
        assert!(draft.toggle(&[product(1, "Mug", false)], ProductId::new(1)));
        assert!(draft.selected().is_empty());
    }

    #[test]
    fn test_submission_gate() {
        let catalog = vec![product(1, "Mug", true)];
        let mut draft = OrderDraft::default();
        assert!(!draft.is_complete());

        draft.buyer_name = "Ada".to_owned();
        draft.buyer_email = "ada@example.com".to_owned();
        assert!(!draft.is_complete());
        assert!(draft.missing_fields().contains_key("products"));

        draft.toggle(&catalog, ProductId::new(1));
        assert!(draft.is_complete());
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn test_whitespace_buyer_fields_do_not_count() {
        let catalog = vec![product(1, "Mug", true)];
        let mut draft = OrderDraft::default();
        draft.buyer_name = "   ".to_owned();
        draft.buyer_email = "\t".to_owned();
        draft.toggle(&catalog, ProductId::new(1));
        let missing = draft.missing_fields();
        assert!(missing.contains_key("buyer_name"));
        assert!(missing.contains_key("buyer_email"));
    }

    #[test]
    fn test_clear_selection_keeps_buyer_fields() {
        let catalog = vec![product(1, "Mug", true)];
        let mut draft = OrderDraft::default();
        draft.buyer_name = "Ada".to_owned();
        draft.toggle(&catalog, ProductId::new(1));
        draft.clear_selection();
        assert!(draft.selected().is_empty());
        assert_eq!(draft.buyer_name, "Ada");
    }
}
