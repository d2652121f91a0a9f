use anyhow::Result;
use clap::Args;
use renovlux_lib::hooks::{
    mount_featured_portfolio, mount_portfolio, mount_portfolio_by_category, mount_portfolio_item,
};
use renovlux_lib::validation;
use renovlux_lib::{Client, ListQuery, PortfolioApi};

use super::settle;
use crate::output::{print_page_info, print_projects, OutputFormat};

#[derive(Args)]
pub struct PortfolioArgs {
    /// Show a single project by ID
    #[arg(long)]
    pub id: Option<String>,

    /// Only the first N projects, as on the home page
    #[arg(long, conflicts_with_all = ["id", "category", "search", "page", "limit"])]
    pub featured: Option<u32>,

    /// Filter by category name (e.g. Cuisine)
    #[arg(long)]
    pub category: Option<String>,

    /// Search titles and descriptions
    #[arg(long)]
    pub search: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub limit: Option<u32>,
}

pub async fn run(args: &PortfolioArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let api = PortfolioApi::new(client.clone());

    if let Some(id) = &args.id {
        let state = settle(&mount_portfolio_item(&api, id)).await?;
        let Some(project) = state.data else {
            anyhow::bail!("Projet introuvable.");
        };
        return print_projects(&[project], format);
    }

    if let Some(limit) = args.featured {
        let state = settle(&mount_featured_portfolio(&api, limit)).await?;
        return print_projects(&state.data, format);
    }

    // A bare category goes to the dedicated endpoint; combined with other
    // filters it becomes a query parameter.
    let plain_category = args.search.is_none() && args.page.is_none() && args.limit.is_none();
    if let (Some(category), true) = (&args.category, plain_category) {
        let state = settle(&mount_portfolio_by_category(&api, category)).await?;
        print_page_info(None, "projects", state.data.len());
        return print_projects(&state.data, format);
    }

    let mut query = ListQuery::default();
    if let Some(category) = &args.category {
        query = query.with_category(&validation::validate_search(category)?);
    }
    if let Some(search) = &args.search {
        query = query.with_search(&validation::validate_search(search)?);
    }
    if let Some(page) = args.page {
        query = query.with_page(page);
    }
    if let Some(limit) = args.limit {
        query = query.with_limit(limit);
    }

    let state = settle(&mount_portfolio(&api, query)).await?;
    print_page_info(state.pagination.as_ref(), "projects", state.data.len());
    print_projects(&state.data, format)
}
