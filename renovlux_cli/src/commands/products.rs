use anyhow::Result;
use clap::Args;
use renovlux_lib::hooks::{mount_available_products, mount_product, mount_products, mount_products_by_category};
use renovlux_lib::validation;
use renovlux_lib::{Client, ListQuery, ProductsApi, SortOrder};

use super::settle;
use crate::output::{print_page_info, print_products, OutputFormat};

#[derive(Args)]
pub struct ProductsArgs {
    /// Show a single product by ID
    #[arg(long)]
    pub id: Option<String>,

    /// Only products in stock
    #[arg(long, conflicts_with_all = ["id", "category", "search"])]
    pub available: bool,

    /// Filter by category (e.g. Sanitaire)
    #[arg(long)]
    pub category: Option<String>,

    /// List a whole category through its own endpoint, without paging
    #[arg(long, requires = "category")]
    pub whole_category: bool,

    /// Search product names
    #[arg(long)]
    pub search: Option<String>,

    /// Sort field (e.g. createdAt, price, name)
    #[arg(long, default_value = "createdAt")]
    pub sort_by: String,

    /// Sort ascending
    #[arg(long, conflicts_with = "desc")]
    pub asc: bool,

    /// Sort descending (the default)
    #[arg(long)]
    pub desc: bool,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page
    #[arg(long, default_value = "12")]
    pub limit: u32,
}

pub async fn run(args: &ProductsArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let api = ProductsApi::new(client.clone());

    if let Some(id) = &args.id {
        let state = settle(&mount_product(&api, id)).await?;
        let Some(product) = state.data else {
            anyhow::bail!("Produit introuvable.");
        };
        return print_products(&[product], format);
    }

    if args.available {
        let state = settle(&mount_available_products(&api)).await?;
        print_page_info(None, "products", state.data.len());
        return print_products(&state.data, format);
    }

    if let (Some(category), true) = (&args.category, args.whole_category) {
        let state = settle(&mount_products_by_category(&api, category)).await?;
        print_page_info(None, "products", state.data.len());
        return print_products(&state.data, format);
    }

    let order = if args.asc { SortOrder::Asc } else { SortOrder::Desc };
    let mut query = ListQuery::default()
        .with_sort_by(&args.sort_by)
        .with_sort_order(order)
        .with_page(args.page)
        .with_limit(args.limit);
    if let Some(category) = &args.category {
        query = query.with_category(&validation::validate_search(category)?);
    }
    if let Some(search) = &args.search {
        query = query.with_search(&validation::validate_search(search)?);
    }

    let state = settle(&mount_products(&api, query)).await?;
    print_page_info(state.pagination.as_ref(), "products", state.data.len());
    print_products(&state.data, format)
}
