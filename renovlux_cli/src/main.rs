mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use renovlux_lib::Config;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "renovlux")]
#[command(about = "Browse the Renovlux renovation catalog and manage a local cart")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List or look up renovation services
    Services(commands::services::ServicesArgs),
    /// List or look up portfolio projects
    Portfolio(commands::portfolio::PortfolioArgs),
    /// List or look up catalog products
    Products(Box<commands::products::ProductsArgs>),
    /// Search the product catalog
    Search(commands::search::SearchArgs),
    /// Send a message through the contact form
    Contact(commands::contact::ContactArgs),
    /// Subscribe an address to the newsletter
    Newsletter(commands::contact::NewsletterArgs),
    /// Manage the local cart
    Cart(commands::cart::CartArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("renovlux=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_name(&cli.output);

    let config = Config::from_env();
    tracing::debug!("Using API at {} (timeout {:?})", config.api_url, config.timeout);
    let client = config.client();

    match &cli.command {
        Commands::Services(args) => commands::services::run(args, &client, format).await?,
        Commands::Portfolio(args) => commands::portfolio::run(args, &client, format).await?,
        Commands::Products(args) => commands::products::run(args.as_ref(), &client, format).await?,
        Commands::Search(args) => commands::search::run(args, &client, format).await?,
        Commands::Contact(args) => commands::contact::run(args, &client, format).await?,
        Commands::Newsletter(args) => commands::contact::run_newsletter(args, &client, format).await?,
        Commands::Cart(args) => commands::cart::run(args, &config, &client, format).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn output_flag_is_global() {
        let cli = Cli::try_parse_from(["renovlux", "cart", "add", "prod-1", "--snapshot", "--output", "json"]).unwrap();
        assert_eq!(OutputFormat::from_name(&cli.output), OutputFormat::Json);
        match cli.command {
            Commands::Cart(args) => match args.command {
                commands::cart::CartCommand::Add { id, snapshot } => {
                    assert_eq!(id, "prod-1");
                    assert!(snapshot);
                }
                _ => panic!("expected cart add"),
            },
            _ => panic!("expected cart"),
        }
    }

    #[test]
    fn product_defaults() {
        let cli = Cli::try_parse_from(["renovlux", "products"]).unwrap();
        let Commands::Products(args) = cli.command else {
            panic!("expected products");
        };
        assert_eq!(args.sort_by, "createdAt");
        assert_eq!(args.page, 1);
        assert_eq!(args.limit, 12);
        assert!(!args.asc);
    }

    #[test]
    fn conflicting_lookups_are_rejected() {
        assert!(Cli::try_parse_from(["renovlux", "services", "--id", "1", "--slug", "peinture"]).is_err());
        assert!(Cli::try_parse_from(["renovlux", "products", "--asc", "--desc"]).is_err());
        assert!(Cli::try_parse_from(["renovlux", "portfolio", "--featured", "6", "--page", "2"]).is_err());
    }
}
