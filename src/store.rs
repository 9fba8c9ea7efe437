// src/store.rs
//
// In-memory attraction store. Constructed once per process; holds what each
// source returned plus the merged table. Nothing is written to disk.

use std::collections::HashMap;

use crate::core::net::HttpGet;
use crate::data::{AttractionRecord, AttractionTable, SourceKind};
use crate::error::Result;
use crate::progress::Progress;
use crate::{scrape, sources};

pub struct AttractionStore<C: HttpGet> {
    client: C,
    fetched: HashMap<SourceKind, Vec<AttractionRecord>>,
    table: Option<AttractionTable>,
}

impl<C: HttpGet> AttractionStore<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            fetched: HashMap::new(),
            table: None,
        }
    }

    pub fn client(&self) -> &C { &self.client }

    /// The merged table, if `load` has succeeded.
    pub fn table(&self) -> Option<&AttractionTable> { self.table.as_ref() }

    pub fn is_loaded(&self) -> bool { self.table.is_some() }

    /// One source's records. Fetched on first use, cached afterwards.
    pub fn source_records(&mut self, kind: SourceKind) -> Result<&[AttractionRecord]> {
        if !self.fetched.contains_key(&kind) {
            let records = scrape::fetch_source(&self.client, sources::source_for(kind))?;
            self.fetched.insert(kind, records);
        } else {
            logd!("Store: {:?} served from memory", kind);
        }
        Ok(self.fetched.get(&kind).map(Vec::as_slice).unwrap_or_default())
    }

    /// Build the merged table once; later calls return the cached one.
    /// If any source fails the error is returned and no table is kept, though
    /// sources that did succeed stay cached.
    pub fn load(&mut self, progress: Option<&mut dyn Progress>) -> Result<&AttractionTable> {
        let table = match self.table.take() {
            Some(t) => t,
            None => self.build(progress)?,
        };
        Ok(&*self.table.insert(table))
    }

    /// Drop everything and fetch again.
    pub fn refresh(&mut self, progress: Option<&mut dyn Progress>) -> Result<&AttractionTable> {
        logf!("Store: Refresh (dropping {} cached source(s))", self.fetched.len());
        self.fetched.clear();
        self.table = None;
        self.load(progress)
    }

    fn build(&mut self, mut progress: Option<&mut dyn Progress>) -> Result<AttractionTable> {
        let all = sources::all_sources();
        if let Some(p) = progress.as_deref_mut() {
            p.begin(all.len());
        }

        let mut batches = Vec::with_capacity(all.len());
        for source in all {
            let kind = source.kind();
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Fetching {}…", kind.label()));
            }

            match self.source_records(kind) {
                Ok(records) => {
                    let records = records.to_vec();
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(kind, records.len());
                    }
                    batches.push(records);
                }
                Err(e) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.finish();
                    }
                    return Err(e);
                }
            }
        }

        let fetched: usize = batches.iter().map(Vec::len).sum();
        let table = AttractionTable::merge(batches);
        logf!(
            "Store: Merged rows={} (fetched={}, duplicates={})",
            table.len(),
            fetched,
            fetched - table.len()
        );

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;

    struct Offline;
    impl HttpGet for Offline {
        fn get_text(&self, url: &str) -> Result<String> {
            Err(ScrapeError::Status { url: s!(url), status: 503 })
        }
    }

    #[test]
    fn failed_load_keeps_no_table() {
        let mut store = AttractionStore::new(Offline);
        assert!(store.load(None).is_err());
        assert!(!store.is_loaded());
        assert!(store.table().is_none());
    }
}
