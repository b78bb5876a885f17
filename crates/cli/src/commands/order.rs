//! Place a public order.

use shopfront_client::{PublicOrderFlow, StorefrontState};
use shopfront_core::ProductId;

/// Load a storefront, select the given products, and submit an order.
#[allow(clippy::print_stdout)]
pub async fn place(
    store_name: &str,
    buyer_name: &str,
    buyer_email: &str,
    product_ids: &[i32],
) -> Result<(), Box<dyn std::error::Error>> {
    let (_cache, client) = super::build_client()?;
    let mut flow = PublicOrderFlow::new(client, store_name);

    match flow.load().await {
        StorefrontState::NotFound => return Err(format!("Store not found: {store_name}").into()),
        StorefrontState::Failed => {
            return Err("Something went wrong. Please try again".into());
        }
        StorefrontState::Loading | StorefrontState::Loaded(_) => {}
    }

    flow.set_buyer_name(buyer_name);
    flow.set_buyer_email(buyer_email);
    for &id in product_ids {
        let id = ProductId::new(id);
        if !flow.toggle(id) {
            return Err(format!("Product {id} is not available in this store").into());
        }
    }

    match flow.submit().await {
        Ok(order) => {
            println!(
                "Order placed: #{} ({} items, total {})",
                order.id,
                order.products.len(),
                order.total_price
            );
            Ok(())
        }
        Err(err) => Err(err.user_message().into()),
    }
}
