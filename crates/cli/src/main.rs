//! Dripstore CLI - drive the storefront stores from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add two medium tees to the cart
//! drip cart add --id p1 --name "Boxy Tee" --price 20 --size M --quantity 2
//!
//! # Show the cart with a promo code applied
//! drip cart show --promo NEWDRIP20
//!
//! # Favourite a product
//! drip wishlist add --id p2 --name "Cargo Pants" --price 55
//!
//! # Try the simulated login
//! drip login --email jade@drip.store --password hunter22
//! ```
//!
//! Cart and wishlist persist in `DRIPSTORE_DATA_DIR`. The signed-in user
//! does not outlive the command. Logs go to stderr, filtered by `RUST_LOG`;
//! set `DRIPSTORE_LOG_FORMAT=json` for structured logs.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{Parser, Subcommand};
use dripstore_core::{Badge, Price, ProductSnapshot};
use dripstore_storefront::config::StorefrontConfig;
use dripstore_storefront::error::AppError;
use dripstore_storefront::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "drip")]
#[command(author, version, about = "Dripstore storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Simulated login
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Simulated signup
    Signup {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,

        /// Display name (defaults to the part of the email before @)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// List available promo codes
    Promos,
    /// Show time left on the flash sale
    Sale,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product in a size
    Add {
        #[command(flatten)]
        product: ProductArgs,

        /// Size label (S, M, L, XL)
        #[arg(short, long, default_value = "M")]
        size: String,

        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a line by variant key (e.g. `p1_M`)
    Remove { key: String },
    /// Set a line's quantity; zero or less removes it
    Set {
        key: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
    /// Print the cart and its totals
    Show {
        /// Promo code to apply to the summary
        #[arg(long)]
        promo: Option<String>,
    },
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Add a product
    Add {
        #[command(flatten)]
        product: ProductArgs,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Card badge: trending, new or almost-gone
        #[arg(short, long)]
        badge: Option<Badge>,
    },
    /// Remove a product by id
    Remove { id: String },
    /// Print the wishlist
    Show,
}

/// Product fields shared by cart and wishlist commands.
#[derive(clap::Args)]
struct ProductArgs {
    /// Product id
    #[arg(long)]
    id: String,

    /// Product name
    #[arg(long)]
    name: String,

    /// Unit price, e.g. 19.99
    #[arg(long, allow_negative_numbers = true)]
    price: Price,

    /// Image URL
    #[arg(long, default_value = "")]
    image: String,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays parseable
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dripstore_storefront=info".into());

    // DRIPSTORE_LOG_FORMAT=json for structured output
    let json = std::env::var("DRIPSTORE_LOG_FORMAT").is_ok_and(|format| format == "json");
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::open(config)?;

    let result = match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add {
                product,
                size,
                quantity,
            } => product.into_snapshot().map(|product| {
                commands::cart::add(&state, product, &size, quantity);
            }),
            CartAction::Remove { key } => {
                commands::cart::remove(&state, &key);
                Ok(())
            }
            CartAction::Set { key, quantity } => {
                commands::cart::set_quantity(&state, &key, quantity);
                Ok(())
            }
            CartAction::Clear => {
                commands::cart::clear(&state);
                Ok(())
            }
            CartAction::Show { promo } => commands::cart::show(&state, promo.as_deref()),
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Add {
                product,
                description,
                badge,
            } => product.into_snapshot().map(|product| {
                let product = product.with_description(description);
                let product = match badge {
                    Some(badge) => product.with_badge(badge),
                    None => product,
                };
                commands::wishlist::add(&state, product);
            }),
            WishlistAction::Remove { id } => {
                commands::wishlist::remove(&state, &id);
                Ok(())
            }
            WishlistAction::Show => {
                commands::wishlist::show(&state);
                Ok(())
            }
        },
        Commands::Login { email, password } => {
            commands::account::login(&state, &email, &password).await
        }
        Commands::Signup {
            email,
            password,
            name,
        } => commands::account::signup(&state, &email, &password, name.as_deref()).await,
        Commands::Promos => {
            commands::promo::list();
            Ok(())
        }
        Commands::Sale => {
            commands::promo::sale(&state);
            Ok(())
        }
    };

    commands::report_notification(&state);
    result
}

impl ProductArgs {
    fn into_snapshot(self) -> Result<ProductSnapshot, AppError> {
        if self.price.is_negative() {
            return Err(AppError::BadRequest(format!(
                "price must not be negative, got {}",
                self.price
            )));
        }
        Ok(ProductSnapshot::new(self.id, self.name, self.price, self.image))
    }
}
