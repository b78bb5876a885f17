//! Log in and inspect the seller dashboard.

use shopfront_client::{Credentials, Guard, GuardDecision, RouteClass};

use crate::DashboardView;

/// Log in, honor the dashboard guard, and print the requested view.
#[allow(clippy::print_stdout)]
pub async fn show(
    email: &str,
    password: &str,
    view: &DashboardView,
) -> Result<(), Box<dyn std::error::Error>> {
    let (cache, client) = super::build_client()?;
    let guard = Guard::new(cache.clone());
    guard.resolve(&client).await?;

    client
        .login(&Credentials {
            email: email.to_owned(),
            password: password.to_owned(),
        })
        .await
        .map_err(|err| err.user_message())?;

    // Dashboard views need a store; mirror the browser client's redirect.
    client.fetch_my_store().await?;
    if guard.decide(RouteClass::Dashboard) == GuardDecision::RedirectToStoreSetup {
        println!("No store yet - create one first (the browser client redirects to /dashboard/store).");
        return Ok(());
    }

    match view {
        DashboardView::Store => {
            let snapshot = cache.snapshot();
            if let Some(store) = &snapshot.store {
                println!("#{} {}", store.id, store.name);
                if let Some(description) = &store.description {
                    println!("{description}");
                }
                if let Some(color) = &store.theme_color {
                    println!("theme: {color}");
                }
            }
        }
        DashboardView::Products => {
            for product in client.fetch_my_products().await? {
                let stock = if product.in_stock { "in stock" } else { "out of stock" };
                println!("#{:<4} {:<30} {:>10}  {}", product.id, product.title, product.price, stock);
            }
        }
        DashboardView::Orders => {
            for order in client.fetch_my_orders().await? {
                println!(
                    "#{:<4} {:<20} {:<10} {:>10}  {}",
                    order.id,
                    order.buyer_name,
                    order.status,
                    order.total_price,
                    order.created_at.format("%Y-%m-%d")
                );
            }
        }
    }
    Ok(())
}
