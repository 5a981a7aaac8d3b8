//! Command-line interface for data-fridge.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Find the analyses you can run with your data and use cases
//! - **options**: List the selectable data fields and use cases
//! - **catalog**: List, show, or export analyses from the catalog
//! - **serve**: Start the interactive web interface
//!
//! ## Usage
//!
//! ```text
//! # What can I run with these fields?
//! data-fridge search --data "Customer ID" --data "Order ID"
//!
//! # Only analyses I have complete data for
//! data-fridge search --data "Customer ID" --complete-only
//!
//! # Combine data and use-case search
//! data-fridge search --data "Customer ID" --use-case "Reduce churn" --combine
//!
//! # JSON output for scripting
//! data-fridge search --data "Customer ID" --format json
//!
//! # Start web UI
//! data-fridge serve --port 8080 --open
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::store::AnalysisCatalog;

pub mod catalog;
pub mod options;
pub mod search;

#[derive(Parser)]
#[command(name = "data-fridge")]
#[command(version)]
#[command(about = "Select the data you have and see which analyses you can run with it")]
#[command(
    long_about = "data-fridge is like a recipe finder, but for data: pick the data fields (ingredients) you have and it shows the analyses (recipes) you can run with them.\n\nYou can also search analyses by use case, and combine the data you have with your desired use cases to narrow the results."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the analyses that fit your data and use cases
    Search(search::SearchArgs),

    /// List the selectable data fields and use cases
    Options(options::OptionsArgs),

    /// Manage the analysis catalog
    Catalog(catalog::CatalogArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load the catalog from `--catalog` if given, otherwise the embedded one
pub(crate) fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<AnalysisCatalog> {
    let catalog = match path {
        Some(path) => AnalysisCatalog::load_from_file(path)?,
        None => AnalysisCatalog::load_embedded()?,
    };
    Ok(catalog)
}
