//! Analysis catalog storage.
//!
//! The catalog holds the definitions of known analyses with their required
//! data fields, use cases, and reference links. A default catalog is
//! compiled into the binary, but custom catalogs can also be loaded from
//! JSON files.
//!
//! ## Embedded Catalog
//!
//! The default catalog ships four analyses:
//!
//! - **Market Basket Analysis**
//! - **RFM Analysis**
//! - **Cohort Analysis**
//! - **Product Recommendation**
//!
//! ## Example
//!
//! ```rust,no_run
//! use data_fridge::AnalysisCatalog;
//! use data_fridge::core::types::AnalysisName;
//!
//! // Load the embedded catalog
//! let catalog = AnalysisCatalog::load_embedded().unwrap();
//!
//! // List all analyses
//! for analysis in &catalog.analyses {
//!     println!("{}", analysis.name);
//! }
//!
//! // Get a specific analysis
//! let rfm = catalog.get(&AnalysisName::new("RFM Analysis"));
//! ```
//!
//! ## Custom Catalogs
//!
//! Export the embedded catalog with `data-fridge catalog export`, edit the
//! JSON, and pass the file back via `--catalog`. The catalog is validated
//! at load time; a duplicate analysis name fails construction immediately.

pub mod store;
