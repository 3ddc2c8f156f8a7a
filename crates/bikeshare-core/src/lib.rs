//! Core types for the bikeshare explorer.
//!
//! Domain models, the shared error type, command-line settings and the
//! formatting, timestamp and aggregate helpers used by the data and runtime
//! crates.

pub mod calculations;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{BikeshareError, Result};
