// src/scrape/mod.rs
mod collect;
mod extract;

pub use collect::fetch_source;
pub use extract::extract_records;
