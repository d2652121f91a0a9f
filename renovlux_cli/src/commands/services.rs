use anyhow::Result;
use clap::Args;
use renovlux_lib::hooks::{mount_active_services, mount_service, mount_service_by_slug, mount_services};
use renovlux_lib::{Client, ServicesApi};

use super::settle;
use crate::output::{print_page_info, print_services, OutputFormat};

#[derive(Args)]
pub struct ServicesArgs {
    /// Only list services currently offered
    #[arg(long)]
    pub active: bool,

    /// Show a single service by ID
    #[arg(long, conflicts_with = "slug")]
    pub id: Option<String>,

    /// Show a single service by slug (e.g. peinture-interieure)
    #[arg(long)]
    pub slug: Option<String>,
}

pub async fn run(args: &ServicesArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let api = ServicesApi::new(client.clone());

    let item_hook = match (&args.id, &args.slug) {
        (Some(id), _) => Some(mount_service(&api, id)),
        (None, Some(slug)) => Some(mount_service_by_slug(&api, slug)),
        (None, None) => None,
    };
    if let Some(hook) = item_hook {
        let state = settle(&hook).await?;
        let Some(service) = state.data else {
            anyhow::bail!("Service introuvable.");
        };
        return print_services(&[service], format);
    }

    let hook = if args.active {
        mount_active_services(&api)
    } else {
        mount_services(&api)
    };
    let state = settle(&hook).await?;
    print_page_info(state.pagination.as_ref(), "services", state.data.len());
    print_services(&state.data, format)
}
