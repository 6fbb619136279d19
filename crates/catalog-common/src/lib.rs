//! Catalog browsing pipeline shared by the printlab front end and tooling.
//!
//! Raw item lists flow one way: filter, then a stable sort, then a paginator
//! that slices the ordered result into fixed-size pages. Every stage is a pure
//! function of its inputs; the only retained state is the query, the sort key
//! and the current page, which the caller owns in a [`browse::BrowseState`].
//! Also carries the print-product helpers (variant grouping, product draft
//! validation) that sit next to the catalog in the UI.

pub mod browse;
pub mod error;
pub mod filter;
pub mod fingerprint;
pub mod normalization;
pub mod pagination;
pub mod product;
pub mod sort;
pub mod types;
pub mod variants;

pub use error::{PipelineError, Result};
