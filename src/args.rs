use clap::Parser;
use listing_harvest::{Harvest, Result};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "listing-harvest")]
#[command(about = "Scrapes product titles and descriptions from a collection page into an HTML report")]
#[command(version)]
pub struct Args {
    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Collection (listing) page URL
    #[arg(long)]
    pub collection_url: Option<String>,

    /// Origin prepended to relative product links
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output HTML file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Pause after each product page in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

/// Build the harvest from the config file (if any) and flag overrides
pub fn build_harvest(args: Args) -> Result<Harvest> {
    let mut harvest = match &args.config {
        Some(path) => {
            ::log::info!("Loading configuration from file: {}", path.display());
            Harvest::from_config_file(path)?
        }
        None => Harvest::default(),
    };

    if let Some(url) = args.collection_url {
        harvest = harvest.with_collection_url(url);
    }
    if let Some(url) = args.base_url {
        harvest = harvest.with_base_url(url);
    }
    if let Some(path) = args.output {
        harvest = harvest.with_output_path(path);
    }
    if let Some(seconds) = args.timeout {
        harvest = harvest.with_request_timeout(seconds);
    }
    if let Some(ms) = args.delay_ms {
        harvest = harvest.with_request_delay(ms);
    }

    Ok(harvest)
}
