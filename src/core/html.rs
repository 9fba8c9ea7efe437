// src/core/html.rs
use scraper::{ElementRef, Html, Selector};

use super::sanitize::strip_join;
use crate::error::{Result, ScrapeError};

/// Raw anchor as found in the page. Either field may be empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub text: String,
    pub href: String,
}

pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: s!(selector),
        message: format!("{e:?}"),
    })
}

/// All elements matching `selector`, in document order. html5ever repairs
/// broken markup, so this never fails on the document itself.
pub fn select_anchors(document: &str, selector: &str) -> Result<Vec<Anchor>> {
    let sel = parse_selector(selector)?;
    let doc = Html::parse_document(document);

    Ok(doc
        .select(&sel)
        .map(|el| Anchor {
            text: visible_text(el),
            href: s!(el.value().attr("href").unwrap_or_default()),
        })
        .collect())
}

/// Text nodes under `el`, each trimmed, glued without separators.
pub fn visible_text(el: ElementRef<'_>) -> String {
    strip_join(el.text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_in_document_order() {
        let doc = r#"<ul><li><a href="/en/a">First</a></li><li><a href="/en/b"> Second </a></li></ul>"#;
        let got = select_anchors(doc, "a[href]").unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got[0], Anchor { text: s!("First"), href: s!("/en/a") });
        assert_eq!(got[1].text, "Second");
    }

    #[test]
    fn nested_markup_is_flattened() {
        let doc = r#"<a href="/en/x">  Paradise <span> Valley </span></a>"#;
        let got = select_anchors(doc, "a").unwrap();
        assert_eq!(got[0].text, "ParadiseValley");
    }

    #[test]
    fn malformed_markup_still_yields_anchors() {
        let doc = r#"<div><a href="/en/souk">Souk El Had<div><a href='/en/kasbah'>Kasbah</p>"#;
        let got = select_anchors(doc, r#"a[href*="/en/"]"#).unwrap();
        let hrefs: Vec<&str> = got.iter().map(|a| a.href.as_str()).collect();
        assert!(hrefs.contains(&"/en/souk"));
        assert!(hrefs.contains(&"/en/kasbah"));
    }

    #[test]
    fn anchor_without_href_has_empty_href() {
        let got = select_anchors("<a>Nowhere</a>", "a").unwrap();
        assert_eq!(got[0].href, "");
    }

    #[test]
    fn bad_selector_is_an_error() {
        assert!(matches!(
            select_anchors("<a></a>", "a[[["),
            Err(ScrapeError::Selector { .. })
        ));
    }
}
