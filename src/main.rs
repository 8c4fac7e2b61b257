//! Suite Hub - terminal dashboard for curating module suites
//!
//! This is the binary entry point. Everything except argument handling and
//! the headless frontend lives in the workspace crates.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};

use suitehub_app::config::{self, URL_ENV_VAR};
use suitehub_core::logging;
use suitehub_remote::HttpRemote;

/// Suite Hub - terminal dashboard for curating module suites
#[derive(Parser, Debug)]
#[command(name = "suitehub")]
#[command(about = "Terminal dashboard for curating module suites and running simulations", long_about = None)]
struct Args {
    /// Base URL of the Suite Hub API (overrides SUITEHUB_URL and the config file)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (NDJSON events on stdout, commands on stdin)
    #[arg(long)]
    headless: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config
            .clone()
            .or_else(config::default_config_path)
            .ok_or_else(|| eyre!("No config directory available, pass --config <PATH>"))?;
        config::init_config_file(&path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    logging::init()?;

    let mut settings = config::load_settings(args.config.as_deref());
    let env_url = std::env::var(URL_ENV_VAR).ok();
    config::apply_url_override(&mut settings, args.url.as_deref(), env_url.as_deref());

    let remote = HttpRemote::new(&settings.server.remote_settings())?;
    let base_url = remote.base_url().to_string();

    if args.headless {
        headless::run_headless(remote, &base_url, settings).await?;
    } else {
        suitehub_tui::run(remote, settings).await?;
    }
    Ok(())
}
