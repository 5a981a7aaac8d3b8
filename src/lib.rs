//! # data-fridge
//!
//! A library for finding the analyses you can run with the data you have.
//!
//! Like a recipe finder, but for data: the catalog tags each analysis
//! (Market Basket Analysis, RFM Analysis, ...) with the data fields it
//! needs and the business use cases it serves. Select the fields you
//! have, optionally the use cases you're after, and the matcher returns
//! the analyses that fit, with a checklist of which required fields you
//! already cover.
//!
//! ## Features
//!
//! - **Any-match**: show analyses you have at least some data for
//! - **All-match**: restrict to analyses with complete data coverage
//! - **Combine mode**: intersect data matches with use-case matches
//! - **Checklist views**: per-analysis required-data coverage for display
//!
//! ## Example
//!
//! ```rust,no_run
//! use data_fridge::{AnalysisCatalog, Matcher, Selection};
//!
//! // Load the embedded catalog of known analyses
//! let catalog = AnalysisCatalog::load_embedded().unwrap();
//!
//! // Say what you have
//! let selection = Selection::new().with_data(["Customer ID", "Order ID"]);
//!
//! // Find matching analyses
//! let matcher = Matcher::new(&catalog);
//! for name in matcher.resolve(&selection) {
//!     println!("{name}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Analysis catalog storage
//! - [`core`]: Core data types for analyses and catalog records
//! - [`matching`]: The matcher and display views
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server for browser-based searching

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod web;

// Re-export commonly used types for convenience
pub use catalog::store::AnalysisCatalog;
pub use core::analysis::AnalysisRecord;
pub use core::types::{AnalysisName, CatalogField};
pub use matching::engine::{MatchOptions, Matcher, Selection};
pub use matching::view::{build_views, AnalysisView};
