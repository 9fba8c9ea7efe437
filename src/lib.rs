// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod gui;
pub mod progress;
pub mod scrape;
pub mod sources;
pub mod store;

pub use data::{AttractionRecord, AttractionTable, FilterCriteria, FilteredView, SourceKind};
pub use error::ScrapeError;
pub use store::AttractionStore;
