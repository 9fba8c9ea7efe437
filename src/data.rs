// src/data.rs
//
// Canonical records and the view layer over them.
//
// - AttractionTable: merged, name-deduplicated records. Built by the store,
//                    never mutated afterwards.
// - FilteredView:    derived rows (indices into the table) for one set of
//                    filter criteria. Display and export read from here.

use std::collections::HashSet;
use std::fmt;

use crate::config::consts::{EMPTY_MESSAGE, EXPLORE_LABEL, LINK_LABEL, MIN_LEN_MAX, VISIT_LABEL};
use crate::core::sanitize::{char_len, contains_ci};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    ExploreAgadir,
    VisitAgadir,
}

impl SourceKind {
    pub const ALL: [SourceKind; 2] = [SourceKind::ExploreAgadir, SourceKind::VisitAgadir];

    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::ExploreAgadir => EXPLORE_LABEL,
            SourceKind::VisitAgadir => VISIT_LABEL,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One discovered link candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttractionRecord {
    pub source: SourceKind,
    pub name: String,
    /// href exactly as it appeared in the page
    pub url: String,
    pub description: String,
    pub category: String,
}

impl AttractionRecord {
    pub fn new(source: SourceKind, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            source,
            name: name.into(),
            url: url.into(),
            description: s!(),
            category: s!(),
        }
    }
}

/// Records keyed by `name`: the first occurrence wins and order is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttractionTable {
    records: Vec<AttractionRecord>,
}

impl AttractionTable {
    /// Concatenate `batches` in the order given, then drop repeated names.
    pub fn merge<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = Vec<AttractionRecord>>,
    {
        Self::from_records(batches.into_iter().flatten())
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = AttractionRecord>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let records = records
            .into_iter()
            .filter(|r| seen.insert(r.name.clone()))
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[AttractionRecord] { &self.records }
    pub fn get(&self, ix: usize) -> Option<&AttractionRecord> { self.records.get(ix) }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &AttractionRecord> {
        self.records.iter()
    }

    /// Apply `criteria` and return the matching rows. The table is untouched.
    pub fn filter(&self, criteria: &FilterCriteria) -> FilteredView<'_> {
        let row_ix = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| criteria.matches(r))
            .map(|(ix, _)| ix)
            .collect();
        FilteredView { row_ix, table: self }
    }

    /// Every row, unfiltered.
    pub fn view_all(&self) -> FilteredView<'_> {
        FilteredView { row_ix: (0..self.records.len()).collect(), table: self }
    }

    /// Re-attach previously computed indices. Out-of-range entries are dropped.
    pub fn view(&self, row_ix: &[usize]) -> FilteredView<'_> {
        let row_ix = row_ix
            .iter()
            .copied()
            .filter(|&ix| ix < self.records.len())
            .collect();
        FilteredView { row_ix, table: self }
    }
}

/// User filter inputs. Each one is inactive when empty (or zero), and the
/// active ones are ANDed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Literal, case-insensitive substring of `name`.
    pub keyword: String,
    /// Literal, case-insensitive substring of `category`. The field is never
    /// populated yet, so any non-empty term matches nothing.
    pub category: String,
    /// Inclusive lower bound on the char length of `name`.
    pub min_len: usize,
}

impl FilterCriteria {
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn min_len(mut self, min_len: usize) -> Self {
        self.set_min_len(min_len);
        self
    }

    /// Clamped to the slider range.
    pub fn set_min_len(&mut self, min_len: usize) {
        self.min_len = min_len.min(MIN_LEN_MAX);
    }

    pub fn is_active(&self) -> bool {
        !self.keyword.is_empty() || !self.category.is_empty() || self.min_len > 0
    }

    pub fn matches(&self, record: &AttractionRecord) -> bool {
        if !self.keyword.is_empty() && !contains_ci(&record.name, &self.keyword) {
            return false;
        }
        if !self.category.is_empty() && !contains_ci(&record.category, &self.category) {
            return false;
        }
        if self.min_len > 0 && char_len(&record.name) < self.min_len {
            return false;
        }
        true
    }
}

/// Filtered projection of an `AttractionTable`.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    /// Positions of kept rows in the table
    pub row_ix: Vec<usize>,
    table: &'a AttractionTable,
}

/// One row as shown on screen. `link` is markup; exports use the raw url.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRow<'a> {
    pub source: &'static str,
    pub name: &'a str,
    pub link: String,
}

/// `[Link](<url>)`
pub fn link_markup(url: &str) -> String {
    format!("[{LINK_LABEL}]({url})")
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }
    pub fn table(&self) -> &'a AttractionTable { self.table }

    pub fn row(&self, i: usize) -> Option<&'a AttractionRecord> {
        let table = self.table;
        self.row_ix.get(i).and_then(|&ix| table.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a AttractionRecord> + '_ {
        let table = self.table;
        self.row_ix.iter().filter_map(move |&ix| table.get(ix))
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.row_ix
    }

    pub fn summary(&self) -> String {
        format!("Showing {} attractions:", self.len())
    }

    /// The empty-state notice, when there is nothing to show.
    pub fn empty_notice(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_MESSAGE)
    }

    pub fn display_rows(&self) -> Vec<DisplayRow<'a>> {
        self.iter()
            .map(|r| DisplayRow {
                source: r.source.label(),
                name: r.name.as_str(),
                link: link_markup(&r.url),
            })
            .collect()
    }

    /// Plain-text rendering for terminals: summary line, then either the
    /// rows (tab separated) or the empty-state notice.
    pub fn render_text(&self) -> String {
        let mut out = self.summary();
        out.push('\n');
        if let Some(notice) = self.empty_notice() {
            out.push_str(notice);
            out.push('\n');
            return out;
        }
        out.push_str("source\tname\turl\n");
        for row in self.display_rows() {
            out.push_str(&format!("{}\t{}\t{}\n", row.source, row.name, row.link));
        }
        out
    }
}
