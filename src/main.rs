//! DexView CLI - browse and render a parsed dex symbol table
//!
//! Usage: dexview <COMMAND>
//!
//! Commands:
//!   browse     Browse packages, classes and methods interactively
//!   tree       Print the visible tree, fully expanded
//!   render     Render one class, or one of its methods
//!   renderers  List registered renderers

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dexview::presentation::{Cli, Commands};

mod commands;
mod ui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::Browse { source, renderer } => {
            commands::browse::cmd_browse(source, renderer.as_deref(), config_path, cli.ascii)
        }
        Commands::Tree {
            source,
            filter,
            json,
        } => commands::tree::cmd_tree(source, filter.as_deref(), *json, config_path),
        Commands::Render {
            source,
            class,
            method,
            renderer,
            display,
        } => commands::render::cmd_render(
            source,
            class,
            method.as_deref(),
            renderer.as_deref(),
            *display,
            config_path,
        ),
        Commands::Renderers => commands::renderers::cmd_renderers(config_path),
    }
}

/// Logs go to stderr so they never mix with rendered output
fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
