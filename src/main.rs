//! Flickr Carousel - Entry Point

use clap::Parser;
use flickr_carousel::model::LayoutMode;
use std::path::PathBuf;
use tracing::{info, warn};

/// Flickr Carousel - search Flickr and browse the results in your terminal
#[derive(Parser, Debug)]
#[command(name = "flickr-carousel")]
#[command(version)]
#[command(about = "Terminal photo carousel with debounced Flickr search")]
pub struct Args {
    /// Start with this search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Flickr API key
    #[arg(long)]
    pub api_key: Option<String>,

    /// Quiet period after the last keystroke before searching, in milliseconds
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Track layout
    #[arg(long, value_parser = ["linear", "circular"])]
    pub layout: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn cli_overrides(&self) -> Result<flickr_carousel::config::CliOverrides, String> {
        let layout = self
            .layout
            .as_deref()
            .map(str::parse::<LayoutMode>)
            .transpose()?;

        Ok(flickr_carousel::config::CliOverrides {
            api_key: self.api_key.clone(),
            debounce_ms: self.debounce_ms,
            layout,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = flickr_carousel::config::load_config_with_precedence(args.config.clone())?;
        let merged = flickr_carousel::config::merge_config(config_file);
        let with_env = flickr_carousel::config::apply_env_overrides(merged);
        flickr_carousel::config::apply_cli_overrides(with_env, args.cli_overrides()?)
    };

    flickr_carousel::logging::init(&config.log_file_path)?;

    info!(
        api_base_url = %config.api_base_url,
        page_size = config.page_size,
        debounce_ms = config.debounce_ms,
        layout = ?config.layout,
        "Configuration loaded and resolved"
    );
    if config.api_key.is_empty() {
        warn!("no Flickr API key configured; searches will fail");
    }

    let options = flickr_carousel::view::RunOptions {
        no_color: args.no_color,
        initial_search: args.search.clone(),
    };
    flickr_carousel::view::run_with_config(&config, options).await?;

    Ok(())
}
