// src/sources/explore.rs
//! Explore Agadir Souss Massa: English-language pages only.
//!
//! The selector already narrows to hrefs containing `/en/`; `accepts` then
//! re-checks the looser `en/` marker so the rule stands on its own.

use super::{Source, long_enough};
use crate::config::consts::{EXPLORE_HREF_MARKER, EXPLORE_SELECTOR, EXPLORE_URL};
use crate::data::SourceKind;

pub struct ExploreAgadir;
pub static SOURCE: ExploreAgadir = ExploreAgadir;

pub fn accepts(name: &str, href: &str) -> bool {
    !name.is_empty()
        && !href.is_empty()
        && href.contains(EXPLORE_HREF_MARKER)
        && long_enough(name)
}

impl Source for ExploreAgadir {
    fn kind(&self) -> SourceKind { SourceKind::ExploreAgadir }
    fn url(&self) -> &'static str { EXPLORE_URL }
    fn selector(&self) -> &'static str { EXPLORE_SELECTOR }
    fn accepts(&self, name: &str, href: &str) -> bool { accepts(name, href) }
}
