//! End-to-end CLI tests.
//!
//! These exercise the binary the way a user would: the search verb with
//! its flag combinations, option listing, and catalog inspection.

use assert_cmd::Command;
use predicates::prelude::*;

fn data_fridge() -> Command {
    Command::cargo_bin("data-fridge").unwrap()
}

#[test]
fn search_complete_data_matches_exactly_one() {
    data_fridge()
        .args([
            "search",
            "--data",
            "Product Name",
            "--data",
            "Product Quantity",
            "--data",
            "Order ID",
            "--complete-only",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matching analyses: 1"))
        .stdout(predicate::str::contains("Market Basket Analysis"))
        .stdout(predicate::str::contains("[x] Product Name"));
}

#[test]
fn search_partial_data_matches_any_overlap() {
    data_fridge()
        .args(["search", "--data", "Customer ID"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matching analyses: 3"))
        .stdout(predicate::str::contains("RFM Analysis"))
        .stdout(predicate::str::contains("Cohort Analysis"))
        .stdout(predicate::str::contains("Product Recommendation"))
        .stdout(predicate::str::contains("Market Basket Analysis").not());
}

#[test]
fn search_checklist_marks_missing_fields() {
    data_fridge()
        .args(["search", "--data", "Customer ID"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] Customer ID"))
        .stdout(predicate::str::contains("[ ] Order Date"));
}

#[test]
fn search_combine_without_data_yields_nothing() {
    data_fridge()
        .args([
            "search",
            "--use-case",
            "Personalized targeting",
            "--combine",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching analyses"));
}

#[test]
fn search_use_case_without_combine_yields_union() {
    data_fridge()
        .args(["search", "--use-case", "Personalized targeting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matching analyses: 2"))
        .stdout(predicate::str::contains("RFM Analysis"))
        .stdout(predicate::str::contains("Product Recommendation"));
}

#[test]
fn search_empty_selection_reports_no_matches() {
    data_fridge()
        .arg("search")
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching analyses"));
}

#[test]
fn search_json_output_is_parseable() {
    let output = data_fridge()
        .args(["search", "--data", "Customer ID", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["count"], 3);
    let names: Vec<&str> = parsed["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["Cohort Analysis", "Product Recommendation", "RFM Analysis"]
    );
}

#[test]
fn search_tsv_output_has_header() {
    data_fridge()
        .args(["search", "--data", "Customer ID", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "name\trequired_have\trequired_total\tuse_cases",
        ));
}

#[test]
fn options_lists_both_kinds() {
    data_fridge()
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data fields (7):"))
        .stdout(predicate::str::contains("Use cases (9):"))
        .stdout(predicate::str::contains("Customer ID"))
        .stdout(predicate::str::contains("Reduce churn"));
}

#[test]
fn options_tsv_output() {
    data_fridge()
        .args(["options", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data\tCustomer ID"))
        .stdout(predicate::str::contains("use_case\tProduct pricing"));
}

#[test]
fn catalog_list_shows_all_analyses() {
    data_fridge()
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis Catalog (4 analyses)"))
        .stdout(predicate::str::contains("Market Basket Analysis"))
        .stdout(predicate::str::contains("Cohort Analysis"));
}

#[test]
fn catalog_show_known_analysis() {
    data_fridge()
        .args(["catalog", "show", "RFM Analysis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis: RFM Analysis"))
        .stdout(predicate::str::contains("Personalized targeting"))
        .stdout(predicate::str::contains("Unit Price"));
}

#[test]
fn catalog_show_unknown_analysis_fails() {
    data_fridge()
        .args(["catalog", "show", "Sentiment Analysis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn catalog_export_and_reuse() {
    let path = std::env::temp_dir().join(format!("data_fridge_export_{}.json", std::process::id()));

    data_fridge()
        .args(["catalog", "export"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 4 analyses"));

    // The exported file round-trips as a custom catalog
    data_fridge()
        .args(["options", "--catalog"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data fields (7):"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn custom_catalog_missing_file_fails() {
    data_fridge()
        .args(["catalog", "list", "--catalog", "/nonexistent/catalog.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read catalog"));
}
