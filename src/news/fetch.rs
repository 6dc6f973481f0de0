//! Fetch the news table from a ticker's quote page.

use scraper::{Html, Selector};

use crate::core::{FvClient, FvError};

/// Outer HTML of `table#news-table` from the quote page, or `None` when the
/// response carried no such table.
///
/// A single GET, no retry. Transport failures and non-2xx statuses surface as
/// errors; the orchestrator downgrades both to a skipped ticker.
pub(crate) async fn fetch_news_table(
    client: &FvClient,
    ticker: &str,
) -> Result<Option<String>, FvError> {
    let mut url = client.base_quote().clone();
    url.query_pairs_mut().append_pair("t", ticker);

    let resp = client.http().get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(FvError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }
    let body = resp.text().await?;

    let document = Html::parse_document(&body);
    let table = Selector::parse("table#news-table").expect("static selector");
    Ok(document.select(&table).next().map(|t| t.html()))
}
