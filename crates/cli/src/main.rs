//! Lara n Shen CLI - The boutique from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalogue
//! lns shop list
//! lns shop show 1
//!
//! # Build a bag and check out
//! lns cart add 1 --size M
//! lns login amara@example.com
//! lns checkout
//!
//! # Admin content entry (requires an admin login)
//! lns login boss@example.com --role admin
//! lns admin add-product --name "Adire Silk Scarf" --price 120 --category Accessories
//!
//! # Ask the AI stylist
//! lns advise 1
//! ```
//!
//! # Commands
//!
//! - `shop` - Catalogue browsing
//! - `gallery` - The lookbook
//! - `cart` - Bag management
//! - `login` / `logout` / `whoami` - Session
//! - `checkout` / `orders` - Checkout and order history
//! - `admin` - Content entry (role-gated)
//! - `advise` - Stylist's note for a product
//! - `open` - Path-based navigation, rendered as text

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use larashen_storefront::app::App;
use larashen_storefront::config::StorefrontConfig;
use larashen_storefront::store::{FileBackend, Store};
use larashen_storefront::stylist::Stylist;
use rust_decimal::Decimal;

mod commands;

#[derive(Parser)]
#[command(name = "lns")]
#[command(author, version, about = "Lara n Shen storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalogue
    Shop {
        #[command(subcommand)]
        action: ShopAction,
    },
    /// Browse the lookbook gallery
    Gallery,
    /// Manage the shopping bag
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Log in (no password; role is self-declared)
    Login {
        /// Email address
        email: String,

        /// Role (`admin`, `customer`)
        #[arg(short, long, default_value = "customer")]
        role: String,
    },
    /// Log out
    Logout,
    /// Show the current user
    Whoami,
    /// Place an order for the current bag
    Checkout,
    /// Show order history
    Orders {
        /// Show every order regardless of owner (admin only)
        #[arg(long)]
        all: bool,
    },
    /// Content entry (requires an admin login)
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Ask the AI stylist how to wear a product
    Advise {
        /// Product id
        product_id: String,
    },
    /// Navigate to a path and render the resolved page
    Open {
        /// Path (e.g., /shop, /cart, /admin)
        path: String,
    },
}

#[derive(Subcommand)]
enum ShopAction {
    /// List the catalogue
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one product in detail
    Show {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the bag
    Show,
    /// Add a product to the bag
    Add {
        /// Product id
        product_id: String,

        /// Size label (must be one the product offers)
        #[arg(short, long)]
        size: String,
    },
    /// Remove a line from the bag
    Remove {
        /// Cart line id
        cart_id: String,
    },
    /// Empty the bag
    Clear,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Add a product to the catalogue
    AddProduct {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Price in whole currency units
        #[arg(short, long)]
        price: Decimal,

        /// Category label
        #[arg(short, long)]
        category: String,

        /// Description (omit with --generate-description to use the AI copywriter)
        #[arg(short, long, default_value = "")]
        description: String,

        /// Image URL
        #[arg(short, long)]
        image: Option<String>,

        /// Generate the description with the AI copywriter
        #[arg(long)]
        generate_description: bool,
    },
    /// Add a look to the gallery
    AddLook {
        /// Caption for the look
        #[arg(short, long)]
        caption: String,

        /// Product id the look shops through to
        #[arg(short, long)]
        product_id: String,

        /// Image URL
        #[arg(short, long)]
        image_url: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let store = Store::new(Box::new(FileBackend::open(&config.data_dir)?));
    let mut app = App::new(store)?;
    let stylist = Stylist::new(config.stylist.as_ref());

    match cli.command {
        Commands::Shop { action } => match action {
            ShopAction::List { category } => commands::shop::list(&app, category.as_deref()),
            ShopAction::Show { id } => commands::shop::show(&mut app, &id)?,
        },
        Commands::Gallery => commands::shop::gallery(&app)?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&app),
            CartAction::Add { product_id, size } => {
                commands::cart::add(&mut app, &product_id, &size)?;
            }
            CartAction::Remove { cart_id } => commands::cart::remove(&mut app, &cart_id)?,
            CartAction::Clear => commands::cart::clear(&mut app)?,
        },
        Commands::Login { email, role } => commands::session::login(&mut app, &email, &role)?,
        Commands::Logout => commands::session::logout(&mut app)?,
        Commands::Whoami => commands::session::whoami(&app),
        Commands::Checkout => commands::orders::checkout(&mut app)?,
        Commands::Orders { all } => commands::orders::list(&app, all)?,
        Commands::Admin { action } => match action {
            AdminAction::AddProduct {
                name,
                price,
                category,
                description,
                image,
                generate_description,
            } => {
                commands::admin::add_product(
                    &mut app,
                    &stylist,
                    commands::admin::ProductForm {
                        name,
                        price,
                        category,
                        description,
                        image,
                        generate_description,
                    },
                )
                .await?;
            }
            AdminAction::AddLook {
                caption,
                product_id,
                image_url,
            } => commands::admin::add_look(&mut app, caption, &product_id, image_url)?,
        },
        Commands::Advise { product_id } => {
            commands::stylist::advise(&app, &stylist, &product_id).await?;
        }
        Commands::Open { path } => commands::open::open(&mut app, &path)?,
    }
    Ok(())
}
