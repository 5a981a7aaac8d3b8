use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::core::types::AnalysisName;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all analyses in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show details of a specific analysis
    Show {
        /// Analysis name
        #[arg(required = true)]
        name: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog } => run_list(catalog, format, verbose),
        CatalogCommands::Show { name, catalog } => run_show(name, catalog, format),
        CatalogCommands::Export { output, catalog } => run_export(output, catalog),
    }
}

fn run_list(
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = crate::cli::load_catalog(catalog_path.as_ref())?;

    if verbose {
        eprintln!("Loaded catalog with {} analyses", catalog.len());
    }

    match format {
        OutputFormat::Text => {
            let name_width = catalog
                .analyses
                .iter()
                .map(|a| a.name.as_str().len())
                .max()
                .unwrap_or(4)
                .max(4);

            println!("Analysis Catalog ({} analyses)\n", catalog.len());
            println!(
                "{:<name_w$} {:>14} {:>9}",
                "Name",
                "Required data",
                "Use cases",
                name_w = name_width
            );
            println!("{}", "-".repeat(name_width + 26));

            for record in &catalog.analyses {
                println!(
                    "{:<name_w$} {:>14} {:>9}",
                    record.name.as_str(),
                    record.required_data.len(),
                    record.use_cases.len(),
                    name_w = name_width
                );
                if verbose {
                    println!("  └─ {}", record.required_data.join(", "));
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = catalog
                .analyses
                .iter()
                .map(|record| {
                    serde_json::json!({
                        "name": record.name.as_str(),
                        "required_data": record.required_data,
                        "use_cases": record.use_cases,
                        "more_info_count": record.more_info.len(),
                        "example_count": record.examples.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\trequired_data\tuse_cases");
            for record in &catalog.analyses {
                println!(
                    "{}\t{}\t{}",
                    record.name,
                    record.required_data.join(", "),
                    record.use_cases.join(", ")
                );
            }
        }
    }

    Ok(())
}

fn run_show(
    name: String,
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let catalog = crate::cli::load_catalog(catalog_path.as_ref())?;

    let record = catalog
        .get(&AnalysisName::new(&name))
        .ok_or_else(|| anyhow::anyhow!("Analysis '{}' not found", name))?;

    match format {
        OutputFormat::Text => {
            println!("Analysis: {}\n", record.name);
            println!("{}\n", record.description);

            println!("Required data:");
            for label in &record.required_data {
                println!("  * {label}");
            }

            println!("\nUse cases:");
            for case in &record.use_cases {
                println!("  * {case}");
            }

            if !record.more_info.is_empty() {
                println!("\nMore info:");
                for url in &record.more_info {
                    println!("  * {url}");
                }
            }

            if !record.examples.is_empty() {
                println!("\nExamples:");
                for url in &record.examples {
                    println!("  * {url}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Tsv => {
            println!("field\tvalue");
            for label in &record.required_data {
                println!("required_data\t{label}");
            }
            for case in &record.use_cases {
                println!("use_case\t{case}");
            }
        }
    }

    Ok(())
}

fn run_export(output: PathBuf, catalog_path: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = crate::cli::load_catalog(catalog_path.as_ref())?;

    let json = catalog.to_json()?;
    std::fs::write(&output, json)?;

    println!(
        "Exported {} analyses to {}",
        catalog.len(),
        output.display()
    );

    Ok(())
}
