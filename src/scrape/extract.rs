// src/scrape/extract.rs
use crate::core::html;
use crate::data::AttractionRecord;
use crate::error::Result;
use crate::sources::Source;

/// Apply a source to one page body: select anchors, keep the ones the
/// source accepts, in document order.
pub fn extract_records(source: &dyn Source, document: &str) -> Result<Vec<AttractionRecord>> {
    let anchors = html::select_anchors(document, source.selector())?;
    let seen = anchors.len();

    let records: Vec<AttractionRecord> = anchors
        .into_iter()
        .filter(|a| source.accepts(&a.text, &a.href))
        .map(|a| AttractionRecord::new(source.kind(), a.text, a.href))
        .collect();

    logd!(
        "Extract: {:?} anchors={} kept={}",
        source.kind(),
        seen,
        records.len()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SourceKind;
    use crate::sources::{explore, visit};

    const EXPLORE_PAGE: &str = r#"
        <nav>
          <a href="/en/">Home</a>
          <a href="/fr/page">Page en français</a>
          <a href="/en/x">Hi</a>
          <a href="/en/souk-el-had"> Souk El Had </a>
          <a href="/en/kasbah"><img src="k.jpg"></a>
        </nav>"#;

    #[test]
    fn explore_keeps_english_named_links() {
        let got = extract_records(&explore::SOURCE, EXPLORE_PAGE).unwrap();
        let names: Vec<&str> = got.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "Souk El Had"]);
        assert!(got.iter().all(|r| r.source == SourceKind::ExploreAgadir));
        assert_eq!(got[1].url, "/en/souk-el-had");
        assert!(got.iter().all(|r| r.description.is_empty() && r.category.is_empty()));
    }

    #[test]
    fn visit_keeps_outbound_links() {
        let page = r#"
            <a href="https://visitagadir.com/about">About Agadir</a>
            <a href="https://external.com/x">External attraction</a>
            <a>No href here</a>"#;
        let got = extract_records(&visit::SOURCE, page).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].name, "External attraction");
        assert_eq!(got[0].source, SourceKind::VisitAgadir);
    }

    #[test]
    fn empty_body_yields_nothing() {
        assert!(extract_records(&visit::SOURCE, "").unwrap().is_empty());
    }
}
