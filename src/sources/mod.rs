// src/sources/mod.rs
//! # Sources
//!
//! One module per travel site. Each one encodes *where* the site is, *which*
//! anchors to look at (a CSS selector), and *which* of those anchors count
//! as attraction candidates (a pure `accepts` predicate over the visible text
//! and the raw href).
//!
//! Fetching, memoization and merging live elsewhere (`scrape`, `store`);
//! sources only describe the site so the heuristics can be tested offline.

use crate::config::consts::MIN_NAME_CHARS;
use crate::core::sanitize::char_len;
use crate::data::SourceKind;

pub mod explore;
pub mod visit;

pub trait Source: Send + Sync + 'static {
    fn kind(&self) -> SourceKind;
    fn url(&self) -> &'static str;

    /// CSS selector for candidate anchors.
    fn selector(&self) -> &'static str;

    /// Inclusion decision for one anchor (`name` already trimmed).
    fn accepts(&self, name: &str, href: &str) -> bool;

    fn label(&self) -> &'static str {
        self.kind().label()
    }
}

/// Fetch order; earlier sources win name collisions.
pub static SOURCES: &[&dyn Source] = &[&explore::SOURCE, &visit::SOURCE];

pub fn all_sources() -> &'static [&'static dyn Source] {
    SOURCES
}

pub fn source_for(kind: SourceKind) -> &'static dyn Source {
    match kind {
        SourceKind::ExploreAgadir => &explore::SOURCE,
        SourceKind::VisitAgadir => &visit::SOURCE,
    }
}

/// Shared by every site: names need more than `MIN_NAME_CHARS` chars.
#[inline]
pub fn long_enough(name: &str) -> bool {
    char_len(name) > MIN_NAME_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_in_fetch_order() {
        let kinds: Vec<SourceKind> = all_sources().iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, SourceKind::ALL.to_vec());
        for kind in SourceKind::ALL {
            assert_eq!(source_for(kind).kind(), kind);
        }
    }

    #[test]
    fn four_chars_is_long_enough() {
        assert!(!long_enough("Bay"));
        assert!(long_enough("Bays"));
        assert!(long_enough("Café"));
    }
}
