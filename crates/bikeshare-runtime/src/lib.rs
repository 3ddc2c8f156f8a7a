//! Interactive runtime for the bikeshare explorer.
//!
//! Console prompts, report rendering, raw-data paging and the session loop
//! that ties them together.

pub mod console;
pub mod pager;
pub mod prompts;
pub mod report;
pub mod session;

pub use bikeshare_core as core;
pub use bikeshare_data as data;
