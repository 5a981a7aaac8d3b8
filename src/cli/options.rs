use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::CatalogField;

#[derive(Args)]
pub struct OptionsArgs {
    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: OptionsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = crate::cli::load_catalog(args.catalog.as_ref())?;

    if verbose {
        eprintln!("Loaded catalog with {} analyses", catalog.len());
    }

    let data = catalog.options(CatalogField::RequiredData);
    let use_cases = catalog.options(CatalogField::UseCases);

    match format {
        OutputFormat::Text => {
            println!("Data fields ({}):", data.len());
            for label in data {
                println!("  * {label}");
            }
            println!("\nUse cases ({}):", use_cases.len());
            for label in use_cases {
                println!("  * {label}");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "data": data,
                "use_cases": use_cases,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("kind\tlabel");
            for label in data {
                println!("data\t{label}");
            }
            for label in use_cases {
                println!("use_case\t{label}");
            }
        }
    }

    Ok(())
}
