//! Centralized constants for default endpoints, headers, and pacing.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:120.0) ",
    "Gecko/20100101 Firefox/120.0"
);

/// Finviz quote page; the ticker goes in the `t` query parameter.
pub(crate) const DEFAULT_BASE_QUOTE: &str = "https://finviz.com/quote.ashx";

/// Sent alongside the UA; Finviz serves localized markup without it.
pub(crate) const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Per-request transport timeout.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause between successive ticker fetches. Courtesy pacing only.
pub(crate) const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(1100);
