// tests/source_rules.rs
//
// Per-site inclusion rules, both as bare predicates and through extraction.

use agadir_scrape::scrape::extract_records;
use agadir_scrape::sources::{self, explore, visit};
use agadir_scrape::SourceKind;

mod common;

#[test]
fn explore_french_href_is_excluded() {
    // text is 10 chars, but the href is not an English page
    assert!(!explore::accepts("Plage Sud!", "/fr/page"));
    let page = r#"<a href="/fr/page">Plage Sud!</a>"#;
    assert!(extract_records(&explore::SOURCE, page).unwrap().is_empty());
}

#[test]
fn explore_short_name_is_excluded() {
    assert!(!explore::accepts("Hi", "/en/x"));
}

#[test]
fn visit_internal_href_is_excluded() {
    assert!(!visit::accepts("About Visit Agadir", "https://visitagadir.com/about"));
}

#[test]
fn visit_external_href_is_included() {
    assert!(visit::accepts("External", "https://external.com/x"));
}

#[test]
fn explore_fixture_extraction() {
    let got = extract_records(&explore::SOURCE, common::EXPLORE_PAGE).unwrap();
    let names: Vec<&str> = got.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Home", "Agadir Park", "Agadir Beach"]);
    assert_eq!(got[1].url, "/en/agadir-park");
    assert!(got.iter().all(|r| r.source == SourceKind::ExploreAgadir));
}

#[test]
fn visit_fixture_extraction() {
    let got = extract_records(&visit::SOURCE, common::VISIT_PAGE).unwrap();
    let names: Vec<&str> = got.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Souss Park", "Agadir Park", "Crocoparc", "Unclosedmarkup"]
    );
    assert!(got.iter().all(|r| r.source == SourceKind::VisitAgadir));
    assert!(got.iter().all(|r| !r.url.contains("visitagadir.com")));
}

#[test]
fn every_source_rejects_empty_anchors() {
    for source in sources::all_sources() {
        assert!(!source.accepts("", "https://external.com/en/x"), "{}", source.label());
        assert!(!source.accepts("Long enough name", ""), "{}", source.label());
    }
}
