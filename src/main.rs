//! # Storefront CLI
//!
//! Drives every storefront page against a live backend from the terminal.
//!
//! ## 📚 Quick Start
//!
//! ```bash
//! export STOREFRONT_API_BASE_URL=http://localhost:3000
//! export STOREFRONT_DOMAIN=gamevault
//! export STOREFRONT_SESSION_COOKIE="session=..."
//!
//! storefront products --search diamonds
//! storefront product 65f0c2 --variant "100 Diamonds" --add 2
//! storefront cart show
//! storefront cart inc <item-id>
//! storefront checkout
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use storefront::cart::{CartView, CartViewModel};
use storefront::checkout::Navigator;
use storefront::config::{StorefrontConfig, API_BASE_URL, DOMAIN};
use storefront::lifecycle::{setup_tracing, Storefront};
use storefront::model::ContactMessage;
use storefront::notify::{Notification, NotificationKind};
use tokio::sync::broadcast;
use tracing::info;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse a store, manage the session cart and check out", long_about = None)]
struct Cli {
    /// Store domain
    #[arg(long, env = "STOREFRONT_DOMAIN", global = true)]
    domain: Option<String>,

    /// Backend base URL
    #[arg(long, env = "STOREFRONT_API_BASE_URL", global = true)]
    api_base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the store and its featured products
    Store,
    /// List products
    Products {
        /// Only products whose title or description contains this text
        #[arg(long)]
        search: Option<String>,
        /// Only featured products
        #[arg(long)]
        featured: bool,
    },
    /// Show one product, optionally adding it to the cart
    Product {
        id: String,
        /// Variant to select (defaults to the first one)
        #[arg(long)]
        variant: Option<String>,
        /// Add the selected variant with this quantity
        #[arg(long)]
        add: Option<u32>,
    },
    /// Inspect or change the session cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Create a payment session and print where to pay
    Checkout,
    /// Send a message to the store
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    Show,
    /// Set an item's quantity
    Set { item: String, quantity: String },
    Inc { item: String },
    Dec { item: String },
    Remove { item: String },
}

/// Prints the redirect target instead of opening a browser.
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, url: &str) {
        println!("Continue to payment: {url}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let config = StorefrontConfig::from_env_with(|name| match name {
        API_BASE_URL => cli.api_base_url.clone(),
        DOMAIN => cli.domain.clone(),
        _ => None,
    })?;
    let storefront = Storefront::from_config(&config, Arc::new(PrintNavigator))?;
    let mut toasts = storefront.notifications.subscribe();

    let domain = || {
        config
            .domain
            .clone()
            .ok_or_else(|| anyhow!("no store domain: pass --domain or set {DOMAIN}"))
    };

    let result = run(cli.command, &storefront, domain).await;
    print_notifications(&mut toasts);
    result
}

async fn run(command: Commands, storefront: &Storefront, domain: impl Fn() -> Result<String>) -> Result<()> {
    match command {
        Commands::Store => {
            let page = storefront.landing_page(&domain()?);
            let content = page.load().await.context("Store Not Found")?;
            println!("{}", content.store.name);
            if let Some(description) = &content.store.description {
                println!("{description}");
            }
            for detail in content.store.contact_details() {
                println!("  {detail:?}");
            }
            println!("\nFeatured:");
            for product in &content.featured {
                println!("  {} [{}]", product.title, product.id);
            }
        }
        Commands::Products { search, featured } => {
            let domain = domain()?;
            if featured {
                let products = storefront.product_client.list_products(&domain, true).await?;
                for product in products.iter().filter(|p| p.matches_search(search.as_deref().unwrap_or(""))) {
                    println!("{} [{}]", product.title, product.id);
                }
                return Ok(());
            }
            let page = storefront.product_list(&domain);
            page.load().await?;
            if let Some(search) = search {
                page.set_search(search);
            }
            let cards = page.cards();
            if cards.is_empty() {
                println!("No Products Found");
            }
            for card in cards {
                println!("{} [{}]\n  {}", card.title, card.product_id, card.subtitle);
                if let Some((name, price)) = &card.starting_at {
                    println!("  {name}: {price}");
                }
                if let Some(more) = &card.more_options {
                    println!("  {more}");
                }
            }
        }
        Commands::Product { id, variant, add } => {
            let page = storefront.product_detail(&domain()?, &id);
            let product = page.load().await.context("Product Not Found")?;
            if let Some(variant) = variant {
                page.select_variant(&variant)?;
            }
            println!("{}\n{} • {}", product.title, product.region, product.category_label());
            for option in page.variants() {
                let marker = if option.selected { "*" } else { " " };
                let stock = if option.in_stock { "In Stock" } else { "Out of Stock" };
                let struck = option.struck_price.map(|p| format!(" (was {p})")).unwrap_or_default();
                println!(" {marker} {}: {}{struck} - {stock}", option.name, option.price);
            }
            if let Some(note) = &product.important_note {
                println!("Note: {note}");
            }
            if let Some(guide) = product.usage_guide() {
                println!("How to Use:\n{guide}");
            }
            if let Some(quantity) = add {
                page.add_to_cart(quantity).await?;
                println!("Cart items: {}", storefront.badge.count());
            }
        }
        Commands::Cart { action } => {
            let cart = storefront.cart_page();
            cart.fetch_cart().await?;
            match action {
                CartAction::Show => {}
                CartAction::Set { item, quantity } => cart.set_quantity_input(&item, &quantity).await?,
                CartAction::Inc { item } => cart.increment(&item).await?,
                CartAction::Dec { item } => cart.decrement(&item).await?,
                CartAction::Remove { item } => cart.remove_item(&item).await?,
            }
            print_cart(&cart);
        }
        Commands::Checkout => {
            let session = storefront.cart_page().checkout().await?;
            info!(payment_id = %session.payment_id, "Checkout handed off");
        }
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let page = storefront.contact_page(&domain()?);
            let message = ContactMessage::new(name, email, subject, message);
            if let Err(e) = page.submit(&message).await {
                let shown = page.form().error.unwrap_or_else(|| e.to_string());
                return Err(anyhow!(shown));
            }
        }
    }
    Ok(())
}

fn print_cart(cart: &CartViewModel) {
    match cart.view() {
        CartView::Loading => println!("Loading..."),
        CartView::Empty => println!("Your cart is empty"),
        CartView::Items { lines, summary } => {
            for line in lines {
                let minus = if line.can_decrement { "-" } else { " " };
                println!(
                    "{} ({}) [{}]\n  {} x {} = {}  [{minus}|+]",
                    line.title, line.variant, line.item_id, line.quantity, line.unit_price, line.line_total
                );
            }
            println!("Subtotal        {}", summary.subtotal);
            println!("Processing Fee  {}", summary.processing_fee);
            println!("Total           {}", summary.total);
        }
    }
    println!("Items in cart: {}", cart.badge().count());
}

fn print_notifications(toasts: &mut broadcast::Receiver<Notification>) {
    while let Ok(toast) = toasts.try_recv() {
        match toast.kind {
            NotificationKind::Success => println!("[{}] {}", toast.title, toast.description),
            NotificationKind::Error => eprintln!("[{}] {}", toast.title, toast.description),
        }
    }
}
