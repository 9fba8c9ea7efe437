// src/sources/visit.rs
//! Visit Agadir: every outbound link. Links back into the site itself are
//! navigation, not attractions.

use super::{Source, long_enough};
use crate::config::consts::{VISIT_OWN_DOMAIN, VISIT_SELECTOR, VISIT_URL};
use crate::data::SourceKind;

pub struct VisitAgadir;
pub static SOURCE: VisitAgadir = VisitAgadir;

pub fn accepts(name: &str, href: &str) -> bool {
    !name.is_empty()
        && !href.is_empty()
        && !href.contains(VISIT_OWN_DOMAIN)
        && long_enough(name)
}

impl Source for VisitAgadir {
    fn kind(&self) -> SourceKind { SourceKind::VisitAgadir }
    fn url(&self) -> &'static str { VISIT_URL }
    fn selector(&self) -> &'static str { VISIT_SELECTOR }
    fn accepts(&self, name: &str, href: &str) -> bool { accepts(name, href) }
}
