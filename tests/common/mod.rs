// tests/common/mod.rs
//
// Offline HTTP: canned pages keyed by URL, with a call counter so tests can
// see when the store goes back to the network.
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;

use agadir_scrape::config::consts::{EXPLORE_URL, VISIT_URL};
use agadir_scrape::core::net::HttpGet;
use agadir_scrape::error::Result;
use agadir_scrape::ScrapeError;

pub const EXPLORE_PAGE: &str = r#"<!doctype html>
<html><body>
  <header>
    <a href="/en/">Home</a>
    <a href="/fr/accueil">Accueil en français</a>
  </header>
  <main>
    <a href="/en/agadir-park">Agadir Park</a>
    <a href="/en/x">Hi</a>
    <a href="/en/agadir-beach">
        Agadir Beach
    </a>
    <a href="/en/kasbah"><img src="kasbah.jpg" alt="kasbah"></a>
  </main>
</body></html>"#;

pub const VISIT_PAGE: &str = r#"<html><body>
  <a href="https://visitagadir.com/about">About Visit Agadir</a>
  <a href="https://souss-park.example/">Souss Park</a>
  <a href="https://example.org/x">X</a>
  <a href="https://explore-agadirsoussmassa.com/en/agadir-park">Agadir Park</a>
  <a href="https://crocoparc.example/">Crocoparc</a>
  <div><a href="https://broken.example/">Unclosed <b>markup
</body></html>"#;

pub struct FakeHttp {
    pages: HashMap<String, std::result::Result<String, u16>>,
    calls: Cell<usize>,
}

impl FakeHttp {
    pub fn new() -> Self {
        Self { pages: HashMap::new(), calls: Cell::new(0) }
    }

    /// Both sites answering with the fixture pages.
    pub fn agadir() -> Self {
        Self::new().page(EXPLORE_URL, EXPLORE_PAGE).page(VISIT_URL, VISIT_PAGE)
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.pages.insert(url.to_string(), Err(status));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl HttpGet for FakeHttp {
    fn get_text(&self, url: &str) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        match self.pages.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(ScrapeError::Status { url: url.to_string(), status: *status }),
            None => Err(ScrapeError::Status { url: url.to_string(), status: 404 }),
        }
    }
}
