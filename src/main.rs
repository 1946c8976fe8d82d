//! amz-paapi - Signed Amazon Product Advertising API search client
//!
//! Builds signed query URLs and extracts typed fields from the XML
//! responses of the product search service.

use amz_paapi::aws::{SearchIndex, SearchParam};
use amz_paapi::commands::{LookupCommand, SearchCommand};
use amz_paapi::config::{Config, OutputFormat};
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "amz-paapi",
    version,
    about = "Signed Amazon Product Advertising API search client",
    long_about = "Searches the product catalog through signed ItemSearch/ItemLookup \
                  requests and prints the extracted item fields."
)]
struct Cli {
    /// Access key ID
    #[arg(long, global = true, env = "AWS_KEY")]
    key: Option<String>,

    /// Secret key used for request signing
    #[arg(long, global = true, env = "AWS_SECRET", hide_env_values = true)]
    secret: Option<String>,

    /// Partner (associate) tag
    #[arg(long, global = true, env = "AWS_TAG")]
    tag: Option<String>,

    /// Service endpoint override
    #[arg(long, global = true, env = "AWS_ENDPOINT")]
    endpoint: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a product category
    #[command(alias = "s")]
    Search {
        /// Search index (e.g. Books, DVD, Electronics)
        index: SearchIndex,

        /// Search criteria as Name=Value pairs (e.g. Title="Blade Runner")
        #[arg(required = true)]
        params: Vec<String>,
    },

    /// Look up items by ASIN
    #[command(alias = "l")]
    Lookup {
        /// ASIN(s) to look up
        #[arg(required = true)]
        asins: Vec<String>,
    },

    /// List accepted search indices and parameters
    Indices,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.format = cli.format;

    if let Some(key) = cli.key {
        config.access_key_id = Some(key);
    }
    if let Some(secret) = cli.secret {
        config.secret_key = Some(secret);
    }
    if let Some(tag) = cli.tag {
        config.partner_tag = Some(tag);
    }
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = Some(endpoint);
    }

    match cli.command {
        Commands::Search { index, params } => {
            let params = parse_search_params(&params)?;

            let cmd = SearchCommand::new(config);
            let output = cmd.execute(index, &params).await?;
            println!("{}", output);
        }

        Commands::Lookup { asins } => {
            let cmd = LookupCommand::new(config);

            let output = if asins.len() == 1 {
                cmd.execute(&asins[0]).await?
            } else {
                cmd.execute_batch(&asins).await?
            };

            println!("{}", output);
        }

        Commands::Indices => {
            println!("Accepted search indices:\n");
            for index in SearchIndex::all() {
                println!("  {}", index);
            }

            println!("\nAccepted search parameters:\n");
            for param in SearchParam::all() {
                println!("  {}", param);
            }
        }
    }

    Ok(())
}

/// Parses `Name=Value` pairs into a parameter map.
fn parse_search_params(pairs: &[String]) -> Result<HashMap<String, String>> {
    let mut params = HashMap::new();

    for pair in pairs {
        match pair.split_once('=') {
            Some((name, value)) if !name.is_empty() && !value.is_empty() => {
                params.insert(name.to_string(), value.to_string());
            }
            _ => bail!(
                "Invalid search parameter '{}'. Use Name=Value pairs, e.g. Title=\"Blade Runner\".",
                pair
            ),
        }
    }

    Ok(params)
}
