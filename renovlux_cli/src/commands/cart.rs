//! The `cart` subcommand: the local cart kept in the SQLite key-value store.

use anyhow::Result;
use clap::{Args, Subcommand};
use renovlux_lib::cart::subtotal;
use renovlux_lib::{CartEntry, CartStore, Client, Config, LocalStorage, ProductsApi};

use crate::output::{print_json, print_products, OutputFormat};

#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart with current product details
    List,
    /// Add a product by ID
    Add {
        id: String,
        /// Store the full product as it is now instead of just its ID
        #[arg(long)]
        snapshot: bool,
    },
    /// Remove a product by ID
    Remove { id: String },
    /// Empty the cart
    Clear,
}

pub async fn run(args: &CartArgs, config: &Config, client: &Client, format: OutputFormat) -> Result<()> {
    let cart = CartStore::new(LocalStorage::open(&config.cart_db)?);
    let api = ProductsApi::new(client.clone());

    match &args.command {
        CartCommand::List => {
            let products = cart.resolve(&api).await;
            let dropped = cart.count().saturating_sub(products.len());
            if dropped > 0 {
                eprintln!("{} item(s) could not be loaded and were skipped", dropped);
            }
            print_products(&products, format)?;
            if format != OutputFormat::Json {
                eprintln!("Sous-total : {:.2} €", subtotal(&products));
            }
        }
        CartCommand::Add { id, snapshot } => {
            let entry = if *snapshot {
                CartEntry::Product(Box::new(api.get_by_id(id).await?))
            } else {
                CartEntry::Id(id.trim().to_string())
            };
            if entry.id().is_empty() {
                anyhow::bail!("Identifiant manquant.");
            }
            let added = cart.add(entry)?;
            report(format, added, if added { "Ajouté au panier." } else { "Déjà dans le panier." });
        }
        CartCommand::Remove { id } => {
            let removed = cart.remove(id.trim())?;
            report(format, removed, if removed { "Retiré du panier." } else { "Absent du panier." });
        }
        CartCommand::Clear => {
            cart.clear()?;
            report(format, true, "Panier vidé.");
        }
    }

    Ok(())
}

fn report(format: OutputFormat, changed: bool, message: &str) {
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({"changed": changed, "message": message})),
        _ => println!("{}", message),
    }
}
