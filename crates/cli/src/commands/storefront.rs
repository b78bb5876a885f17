//! Browse a public storefront.

use shopfront_client::{PublicOrderFlow, StorefrontState};

/// Fetch and print a public storefront, optionally filtered by title.
#[allow(clippy::print_stdout)]
pub async fn show(store_name: &str, search: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let (_cache, client) = super::build_client()?;
    let mut flow = PublicOrderFlow::new(client, store_name);

    match flow.load().await {
        StorefrontState::NotFound => {
            println!("Store not found: {store_name}");
            return Ok(());
        }
        StorefrontState::Failed => {
            return Err("Something went wrong. Please try again".into());
        }
        StorefrontState::Loading | StorefrontState::Loaded(_) => {}
    }

    let StorefrontState::Loaded(snapshot) = flow.storefront() else {
        return Err("Something went wrong. Please try again".into());
    };

    println!("{}", snapshot.store.name);
    if let Some(description) = &snapshot.store.description {
        println!("{description}");
    }
    println!();

    let products = search.map_or_else(|| flow.catalog().iter().collect(), |q| flow.search(q));
    if products.is_empty() {
        println!("No products match.");
        return Ok(());
    }
    for product in products {
        let stock = if product.in_stock { "in stock" } else { "out of stock" };
        println!(
            "#{:<4} {:<30} {:>10}  {}",
            product.id, product.title, product.price, stock
        );
        if !product.tags.is_empty() {
            println!("      tags: {}", product.tags.join(", "));
        }
    }
    Ok(())
}
