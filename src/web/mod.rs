//! Web interface for browser-based searching.
//!
//! A single embedded page with two multi-selects (data fields, use cases)
//! and two toggles (combine search, show incomplete). Every change posts
//! the whole selection back and re-renders the results; the server keeps
//! no per-client state.
//!
//! ## API Endpoints
//!
//! - `GET /` - Main page
//! - `GET /api/options` - Selectable data fields and use cases
//! - `GET /api/catalog` - List all analyses in the catalog
//! - `POST /api/search` - Resolve a selection to matching analyses (JSON)

pub mod server;
