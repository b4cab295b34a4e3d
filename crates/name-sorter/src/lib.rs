pub mod config;
pub mod error;
pub mod lines;
pub mod names;
pub mod telemetry;

pub use names::{compute_sort_key, parse, sort_names, NameFormatError, ParsedName, SortKey};
