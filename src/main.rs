//! Feed Shell - Entry Point

use clap::Parser;
use feedshell::integration::{initial_state, parse_viewport};
use feedshell::view::ViewOptions;
use std::path::PathBuf;
use tracing::info;

/// Feed Shell - terminal social dashboard over mock data
#[derive(Parser, Debug)]
#[command(name = "feedshell")]
#[command(version)]
#[command(about = "Terminal social dashboard: news feed, stories, groups and chat contacts")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Display name of the signed-in user
    #[arg(short, long)]
    pub user: Option<String>,

    /// Start with the chat contacts filtered by this query
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Start with the sidebar's Explore section expanded
    #[arg(short, long)]
    pub explore: bool,

    /// Print the region layout for a WIDTHxHEIGHT pixel viewport and exit
    #[arg(long, value_name = "WIDTHxHEIGHT")]
    pub layout: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = feedshell::config::load_config_with_precedence(args.config.clone())?;
        let merged = feedshell::config::merge_config(config_file)?;
        let with_env = feedshell::config::apply_env_overrides(merged);
        // --explore only overrides when passed
        feedshell::config::apply_cli_overrides(
            with_env,
            args.user.clone(),
            args.explore.then_some(true),
        )
    };

    if let Some(raw) = args.layout.as_deref() {
        let (width, height) = parse_viewport(raw)?;
        print!("{}", config.layout.compute(width, height).describe());
        return Ok(());
    }

    feedshell::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let state = initial_state(&config, args.filter.as_deref())?;
    let options = ViewOptions::from_config(&config, args.no_color);

    feedshell::view::run_with_state(state, options)?;

    Ok(())
}
