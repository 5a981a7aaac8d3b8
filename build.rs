use std::collections::HashSet;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/analyses.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let analyses = catalog.get("analyses").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'analyses' field\n\
             The catalog must have a top-level 'analyses' array.\n"
        );
    });

    let records = analyses.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'analyses' must be an array\n\
             Got: {analyses}\n"
        );
    });

    let mut seen_names = HashSet::new();
    for (i, record) in records.iter().enumerate() {
        validate_record_fields(record, i, &mut seen_names);
    }

    println!(
        "cargo:warning=Validated catalog: {} analyses",
        records.len()
    );
}

fn validate_record_fields(
    record: &serde_json::Value,
    index: usize,
    seen_names: &mut HashSet<String>,
) {
    let name = record
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Analysis at index {index} missing 'name' field\n");
        });

    assert!(
        !name.trim().is_empty(),
        "\n\nCATALOG BUILD ERROR: Analysis at index {index} has an empty name\n"
    );

    assert!(
        seen_names.insert(name.to_string()),
        "\n\nCATALOG BUILD ERROR: Duplicate analysis name '{name}'\n\
         Analysis names are catalog keys and must be unique.\n"
    );

    for field in ["required_data", "use_cases", "more_info", "examples"] {
        let value = record.get(field).unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Analysis '{name}' missing '{field}' field\n");
        });
        assert!(
            value.is_array(),
            "\n\nCATALOG BUILD ERROR: Analysis '{name}' field '{field}' must be an array\n"
        );
    }

    assert!(
        record.get("description").and_then(|v| v.as_str()).is_some(),
        "\n\nCATALOG BUILD ERROR: Analysis '{name}' missing 'description' field\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/analyses.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
