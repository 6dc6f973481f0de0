//! Public client surface + builder.
//! Defaults live in `constants` (UA, base URL, timeout, pacing).

mod constants;

use crate::core::FvError;
use constants::{ACCEPT_LANGUAGE, DEFAULT_BASE_QUOTE, DEFAULT_FETCH_DELAY, DEFAULT_TIMEOUT, USER_AGENT};
use reqwest::Client;
use reqwest::header::{ACCEPT_LANGUAGE as ACCEPT_LANGUAGE_HEADER, HeaderMap, HeaderValue};
use std::time::Duration;
use url::Url;

/// HTTP client for the Finviz quote pages.
///
/// Cheap to clone; the underlying `reqwest::Client` is shared.
#[derive(Debug, Clone)]
pub struct FvClient {
    http: Client,
    base_quote: Url,
    fetch_delay: Duration,
}

impl Default for FvClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl FvClient {
    /// Create a new builder.
    pub fn builder() -> FvClientBuilder {
        FvClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_quote(&self) -> &Url {
        &self.base_quote
    }

    /// The pause inserted between successive ticker fetches.
    pub fn fetch_delay(&self) -> Duration {
        self.fetch_delay
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FvClientBuilder {
    user_agent: Option<String>,
    base_quote: Option<Url>,
    timeout: Option<Duration>,
    fetch_delay: Option<Duration>,
}

impl FvClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the quote page base (e.g. a mock server in tests).
    pub fn base_quote(mut self, url: Url) -> Self {
        self.base_quote = Some(url);
        self
    }

    /// Set the per-request timeout. Default: 10 s.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set the pause between successive ticker fetches. Default: 1.1 s.
    ///
    /// This is courtesy pacing toward the remote site, not a correctness
    /// mechanism; `Duration::ZERO` disables it.
    pub fn fetch_delay(mut self, dur: Duration) -> Self {
        self.fetch_delay = Some(dur);
        self
    }

    /// Build the [`FvClient`].
    ///
    /// # Errors
    ///
    /// Returns an `FvError` if the default base URL fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<FvClient, FvError> {
        let base_quote = match self.base_quote {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTE)?,
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE_HEADER,
            HeaderValue::from_static(ACCEPT_LANGUAGE),
        );

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .default_headers(headers)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        Ok(FvClient {
            http,
            base_quote,
            fetch_delay: self.fetch_delay.unwrap_or(DEFAULT_FETCH_DELAY),
        })
    }
}
