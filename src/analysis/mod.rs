//! Multi-ticker orchestration: fetch, parse, normalize, score, aggregate.

mod aggregate;

pub use aggregate::SentimentTable;

#[cfg(test)]
pub(crate) use aggregate::aggregate;

use std::collections::{HashMap, HashSet};

use chrono::{Local, NaiveDate};

use crate::news::{self, DateFill, RawNewsRow, ScoredHeadline};
use crate::sentiment::{SentimentModel, VaderModel};
use crate::FvClient;

/// The outcome of one pipeline run.
///
/// All data is transient: constructed fresh per run, discarded after
/// presentation. Nothing is persisted.
#[derive(Debug)]
pub struct Analysis {
    headlines: Vec<ScoredHeadline>,
    daily: Option<SentimentTable>,
}

impl Analysis {
    /// Every scored headline that survived date normalization, in fetch order.
    pub fn headlines(&self) -> &[ScoredHeadline] {
        &self.headlines
    }

    /// The daily average table, or `None` when no headline survived.
    pub fn daily(&self) -> Option<&SentimentTable> {
        self.daily.as_ref()
    }

    /// True when no usable headline survived fetching and filtering.
    ///
    /// This is the branch point for the "no data at all" user-visible
    /// condition; callers must check it before rendering a chart.
    pub fn is_empty(&self) -> bool {
        self.headlines.is_empty()
    }
}

/// A builder for running the sentiment pipeline over a list of symbols.
///
/// Tickers are fetched one at a time, in order, with the client's politeness
/// delay between requests. A ticker whose fetch fails or whose page has no
/// news table is skipped with a warning; the run itself never fails.
pub struct AnalysisBuilder {
    client: FvClient,
    tickers: Vec<String>,
    date_fill: DateFill,
    context_date: Option<NaiveDate>,
    model: Box<dyn SentimentModel>,
}

impl AnalysisBuilder {
    /// Creates a new `AnalysisBuilder` with the default VADER scorer.
    pub fn new(client: &FvClient) -> Self {
        Self {
            client: client.clone(),
            tickers: Vec::new(),
            date_fill: DateFill::default(),
            context_date: None,
            model: Box::new(VaderModel::new()),
        }
    }

    /// Sets the symbols to analyze. Tokens are trimmed, upper-cased, and
    /// de-duplicated in order; empty tokens are discarded.
    #[must_use]
    pub fn tickers<I, S>(mut self, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tickers = tickers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the handling of rows whose timestamp omitted the date.
    /// Default: [`DateFill::Forward`].
    #[must_use]
    pub const fn date_fill(mut self, fill: DateFill) -> Self {
        self.date_fill = fill;
        self
    }

    /// Pins the context date used for year-less and relative date tokens.
    /// Default: today in local time.
    #[must_use]
    pub const fn context_date(mut self, date: NaiveDate) -> Self {
        self.context_date = Some(date);
        self
    }

    /// Replaces the sentiment scorer.
    #[must_use]
    pub fn model(mut self, model: Box<dyn SentimentModel>) -> Self {
        self.model = model;
        self
    }

    /// Runs the pipeline: fetch each ticker, parse, normalize, score, and
    /// aggregate. Per-ticker failures are downgraded to warnings, so the run
    /// itself is infallible; inspect [`Analysis::is_empty`] for the
    /// no-data-at-all outcome.
    pub async fn run(self) -> Analysis {
        let tickers = normalize_tickers(&self.tickers);
        let context = self
            .context_date
            .unwrap_or_else(|| Local::now().date_naive());

        let mut raw: Vec<RawNewsRow> = Vec::new();
        for (i, ticker) in tickers.iter().enumerate() {
            if i > 0 && !self.client.fetch_delay().is_zero() {
                tokio::time::sleep(self.client.fetch_delay()).await;
            }
            match news::fetch_news_table(&self.client, ticker).await {
                Ok(Some(table)) => {
                    let rows = news::parse_rows(ticker, &table);
                    tracing::debug!(ticker = %ticker, rows = rows.len(), "parsed news table");
                    raw.extend(rows);
                }
                Ok(None) => {
                    tracing::warn!(ticker = %ticker, "no news table on quote page, skipping");
                }
                Err(e) => {
                    tracing::warn!(ticker = %ticker, error = %e, "fetch failed, skipping");
                }
            }
        }

        let headlines = score_rows(raw, context, self.date_fill, self.model.as_ref());
        let daily = aggregate::aggregate(&headlines);
        Analysis { headlines, daily }
    }
}

/// Split a free-text, comma-separated ticker list into clean tokens.
pub fn parse_ticker_list(input: &str) -> Vec<String> {
    input.split(',').map(str::to_string).collect()
}

fn normalize_tickers(input: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    input
        .iter()
        .map(|t| t.trim().to_uppercase())
        .filter(|t| !t.is_empty() && seen.insert(t.clone()))
        .collect()
}

/// Resolve each row's date and score its headline. Rows whose date cannot be
/// resolved are dropped here and never reach aggregation.
fn score_rows(
    rows: Vec<RawNewsRow>,
    context: NaiveDate,
    fill: DateFill,
    model: &dyn SentimentModel,
) -> Vec<ScoredHeadline> {
    let mut last_seen: HashMap<String, NaiveDate> = HashMap::new();
    let mut out = Vec::with_capacity(rows.len());

    for row in rows {
        let date = match row.date.as_deref() {
            Some(raw) => match news::parse_news_date(raw, context) {
                Some(d) => {
                    last_seen.insert(row.ticker.clone(), d);
                    Some(d)
                }
                None => {
                    tracing::debug!(ticker = %row.ticker, raw = %raw, "unparseable date, dropping row");
                    None
                }
            },
            None => match fill {
                DateFill::Forward => last_seen.get(&row.ticker).copied(),
                DateFill::Drop => None,
            },
        };
        let Some(date) = date else {
            continue;
        };

        let compound = model.score(&row.title);
        out.push(ScoredHeadline {
            ticker: row.ticker,
            date,
            time: row.time,
            title: row.title,
            compound,
        });
    }
    out
}
