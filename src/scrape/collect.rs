// src/scrape/collect.rs
use crate::core::net::HttpGet;
use crate::data::AttractionRecord;
use crate::error::Result;
use crate::sources::Source;

use super::extract_records;

/// GET the source page and extract its records. Errors propagate as-is.
pub fn fetch_source<C>(client: &C, source: &dyn Source) -> Result<Vec<AttractionRecord>>
where
    C: HttpGet + ?Sized,
{
    logf!("Fetch: Begin {} ({})", source.label(), source.url());
    let body = client.get_text(source.url()).inspect_err(|e| {
        loge!("Fetch: Error {}: {}", source.label(), e);
    })?;
    let records = extract_records(source, &body)?;
    logf!("Fetch: OK {} records={}", source.label(), records.len());
    Ok(records)
}
