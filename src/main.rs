mod api;
mod application;
mod cli;
mod data;
mod domain;
mod infra;
mod ml;

use anyhow::Result;
use cli::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the `predict` JSON; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(log_filter()?)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.run()
}

/// `RUST_LOG` plus info-level defaults for this crate and the HTTP trace layer.
fn log_filter() -> Result<EnvFilter> {
    Ok(EnvFilter::from_default_env()
        .add_directive("gambling_text_classifier=info".parse()?)
        .add_directive("tower_http=info".parse()?))
}
