// src/core/net.rs
//
// Blocking HTTP GET. One request per call: no retries, no caching here
// (memoization lives in `store`).

use crate::config::options::ScrapeOptions;
use crate::error::{Result, ScrapeError};

/// Anything that can turn a URL into a response body.
/// `HttpClient` is the real one; tests plug in canned pages.
pub trait HttpGet {
    fn get_text(&self, url: &str) -> Result<String>;
}

impl<T: HttpGet + ?Sized> HttpGet for &T {
    fn get_text(&self, url: &str) -> Result<String> {
        (**self).get_text(url)
    }
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(opts.user_agent.clone())
            .timeout(opts.timeout)
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }
}

impl HttpGet for HttpClient {
    fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| ScrapeError::Network { url: s!(url), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: s!(url),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|source| ScrapeError::Body { url: s!(url), source })?;
        logd!("Net: GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(body)
    }
}
