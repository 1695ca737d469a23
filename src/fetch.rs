//! Document retrieval.
//!
//! The harvest loop reads documents through the [`DocumentSource`] trait.
//! [`HttpSource`] resolves identifiers against a base URL and issues one
//! blocking GET per document; there is no retry.

use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Anything that can produce the raw HTML of a document by identifier.
pub trait DocumentSource {
    /// Retrieve and decode one document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be retrieved or is not valid
    /// UTF-8 text.
    fn fetch(&self, id: &str) -> Result<String>;
}

/// Blocking HTTP source rooted at a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl HttpSource {
    /// Create a source with a per-request timeout and `User-Agent`.
    ///
    /// A base URL without a trailing slash is treated as a directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `base_url` does not parse and
    /// [`Error::Config`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a document identifier against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the joined URL is invalid.
    pub fn resolve(&self, id: &str) -> Result<Url> {
        self.base_url
            .join(id)
            .map_err(|e| Error::InvalidUrl(format!("{id}: {e}")))
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self, id: &str) -> Result<String> {
        let url = self.resolve(id)?;
        let response = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("HTTP Error {status} for {url}")));
        }

        let body = response.bytes().map_err(|e| Error::Fetch(e.to_string()))?;
        decode_body(body.to_vec())
    }
}

/// Parse a base URL, forcing a trailing slash on its path.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidUrl(format!("{raw}: cannot be a base URL")));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Decode a response body strictly as UTF-8.
///
/// # Errors
///
/// Returns [`Error::Decode`] on any invalid byte sequence.
pub fn decode_body(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| Error::Decode(e.utf8_error().to_string()))
}
