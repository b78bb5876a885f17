//! Shopfront CLI - drive the client library from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse a public storefront
//! sf storefront mugs-r-us
//! sf storefront mugs-r-us --search mug
//!
//! # Place a public order
//! sf order mugs-r-us --name "Ada" --email ada@example.com --product-id 1 --product-id 3
//!
//! # Seller dashboard (logs in, then runs one query)
//! sf dashboard --email demo@example.com --password password123 products
//! ```
//!
//! # Environment Variables
//!
//! - `SHOPFRONT_API_BASE_URL` - Base URL of the Shopfront REST API

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sf")]
#[command(author, version, about = "Shopfront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse a public storefront
    Storefront {
        /// The store's unique name (URL slug)
        store_name: String,

        /// Filter products by title
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Place an order against a public storefront
    Order {
        /// The store's unique name (URL slug)
        store_name: String,

        /// Buyer name
        #[arg(short, long)]
        name: String,

        /// Buyer email
        #[arg(short, long)]
        email: String,

        /// Product id to order (repeatable)
        #[arg(short, long = "product-id")]
        product_id: Vec<i32>,
    },
    /// Log in and inspect the seller dashboard
    Dashboard {
        /// Seller email
        #[arg(short, long)]
        email: String,

        /// Seller password
        #[arg(short, long)]
        password: String,

        #[command(subcommand)]
        view: DashboardView,
    },
}

#[derive(Subcommand)]
enum DashboardView {
    /// Show the seller's store record
    Store,
    /// List the seller's catalog
    Products,
    /// List orders against the seller's store
    Orders,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Storefront { store_name, search } => {
            commands::storefront::show(&store_name, search.as_deref()).await?;
        }
        Commands::Order {
            store_name,
            name,
            email,
            product_id,
        } => {
            commands::order::place(&store_name, &name, &email, &product_id).await?;
        }
        Commands::Dashboard {
            email,
            password,
            view,
        } => {
            commands::dashboard::show(&email, &password, &view).await?;
        }
    }
    Ok(())
}
