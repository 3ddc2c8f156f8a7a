//! Data layer for the bikeshare explorer.
//!
//! Loads per-city trip CSV files into a [`table::TripTable`], applies the
//! month/day filters and computes the descriptive statistics shown by the
//! reports.

pub mod filter;
pub mod reader;
pub mod stats;
pub mod table;

pub use bikeshare_core as core;
