//! Core data types for analyses and catalog records.

pub mod analysis;
pub mod types;
