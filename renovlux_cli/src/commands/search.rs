use anyhow::Result;
use clap::Args;
use renovlux_lib::hooks::mount_product_search;
use renovlux_lib::validation;
use renovlux_lib::{Client, ProductsApi};

use super::settle;
use crate::output::{print_page_info, print_products, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in the product catalog
    pub query: String,
}

pub async fn run(args: &SearchArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let query = validation::validate_search(&args.query)?;
    let hook = mount_product_search(&ProductsApi::new(client.clone()), &query);
    let state = settle(&hook).await?;
    print_page_info(None, "products", state.data.len());
    print_products(&state.data, format)
}
