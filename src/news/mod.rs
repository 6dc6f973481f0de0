//! Fetching and parsing of the per-ticker Finviz news table.

mod dates;
mod fetch;
mod model;
mod parse;

pub use dates::DateFill;
pub use model::{RawNewsRow, ScoredHeadline};

pub(crate) use dates::parse_news_date;
pub(crate) use fetch::fetch_news_table;
pub(crate) use parse::parse_rows;

use crate::{FvClient, FvError};

/// A builder for fetching the raw news rows for a single symbol.
///
/// This is the single-ticker surface; [`crate::AnalysisBuilder`] drives it for
/// a whole list and carries the rows through scoring and aggregation.
pub struct NewsBuilder {
    client: FvClient,
    symbol: String,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a given symbol.
    ///
    /// The symbol is trimmed and upper-cased before use.
    pub fn new(client: &FvClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into().trim().to_uppercase(),
        }
    }

    /// Fetches the quote page and parses the news table rows.
    ///
    /// Returns `Ok(None)` when the page came back without a news table. That
    /// is an expected outcome (unknown symbol, layout change), not an error.
    ///
    /// # Errors
    ///
    /// Returns an `FvError` on transport failure or a non-success HTTP status.
    pub async fn fetch(self) -> Result<Option<Vec<RawNewsRow>>, FvError> {
        let Some(table) = fetch::fetch_news_table(&self.client, &self.symbol).await? else {
            return Ok(None);
        };
        Ok(Some(parse::parse_rows(&self.symbol, &table)))
    }
}
