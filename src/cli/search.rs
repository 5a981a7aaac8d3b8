use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::matching::engine::{MatchOptions, Matcher, Selection};
use crate::matching::view::{build_views, AnalysisView};

#[derive(Args)]
pub struct SearchArgs {
    /// Data field you have (repeat for each field)
    #[arg(short = 'd', long = "data", value_name = "FIELD")]
    pub data: Vec<String>,

    /// Use case you're after (repeat for each one)
    #[arg(short = 'u', long = "use-case", value_name = "CASE")]
    pub use_cases: Vec<String>,

    /// Intersect data and use-case results instead of combining them
    #[arg(long)]
    pub combine: bool,

    /// Only show analyses you have complete data for
    #[arg(long)]
    pub complete_only: bool,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = crate::cli::load_catalog(args.catalog.as_ref())?;

    if verbose {
        eprintln!("Loaded catalog with {} analyses", catalog.len());
    }

    let selection = Selection::new()
        .with_data(args.data)
        .with_use_cases(args.use_cases);

    let options = MatchOptions {
        combine_search: args.combine,
        show_incomplete: !args.complete_only,
    };

    let matcher = Matcher::with_options(&catalog, options);
    let matches = matcher.resolve(&selection);
    let views = build_views(&catalog, &matches, &selection);

    match format {
        OutputFormat::Text => print_text(&views),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "count": views.len(),
                "matches": views,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\trequired_have\trequired_total\tuse_cases");
            for view in &views {
                println!(
                    "{}\t{}\t{}\t{}",
                    view.name,
                    view.have_count(),
                    view.required_data.len(),
                    view.use_cases.join(", ")
                );
            }
        }
    }

    Ok(())
}

fn print_text(views: &[AnalysisView]) {
    if views.is_empty() {
        println!("No matching analyses. Try selecting more data fields or use cases.");
        println!("Run 'data-fridge options' to see what can be selected.");
        return;
    }

    println!("Matching analyses: {}\n", views.len());

    for view in views {
        println!("{}", view.name);
        println!("{}", "-".repeat(view.name.as_str().len()));
        println!("{}\n", view.description);

        println!("Required data ({}/{}):", view.have_count(), view.required_data.len());
        for item in &view.required_data {
            let mark = if item.have { "x" } else { " " };
            println!("  [{mark}] {}", item.label);
        }

        println!("\nUse cases:");
        for case in &view.use_cases {
            println!("  * {case}");
        }

        if !view.more_info.is_empty() {
            println!("\nMore info:");
            for url in &view.more_info {
                println!("  * {url}");
            }
        }

        if !view.examples.is_empty() {
            println!("\nExamples:");
            for url in &view.examples {
                println!("  * {url}");
            }
        }

        println!();
    }
}
