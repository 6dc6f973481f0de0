//! Group scored headlines by (ticker, day) and pivot to a date-by-ticker table.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::news::ScoredHeadline;

/// Daily mean compound sentiment, pivoted rows-by-date, columns-by-ticker.
///
/// The row set is the union of dates observed across all tickers; a cell with
/// no headlines for its (date, ticker) pair is absent, never zero-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentTable {
    tickers: Vec<String>,
    dates: Vec<NaiveDate>,
    cells: BTreeMap<NaiveDate, BTreeMap<String, f64>>,
}

impl SentimentTable {
    /// Column labels: every ticker that yielded at least one headline, sorted.
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// Row labels: the union of observed dates, ascending.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// The mean compound score for one cell, if any headline fell in it.
    pub fn get(&self, date: NaiveDate, ticker: &str) -> Option<f64> {
        self.cells.get(&date)?.get(ticker).copied()
    }
}

/// Mean compound per (ticker, date), pivoted. `None` for empty input, which
/// callers must branch on before attempting presentation.
pub(crate) fn aggregate(headlines: &[ScoredHeadline]) -> Option<SentimentTable> {
    if headlines.is_empty() {
        return None;
    }

    let mut sums: BTreeMap<(NaiveDate, &str), (f64, u32)> = BTreeMap::new();
    for h in headlines {
        let entry = sums.entry((h.date, h.ticker.as_str())).or_insert((0.0, 0));
        entry.0 += h.compound;
        entry.1 += 1;
    }

    let mut cells: BTreeMap<NaiveDate, BTreeMap<String, f64>> = BTreeMap::new();
    let mut tickers: BTreeSet<&str> = BTreeSet::new();
    for ((date, ticker), (sum, count)) in sums {
        cells
            .entry(date)
            .or_default()
            .insert(ticker.to_string(), sum / f64::from(count));
        tickers.insert(ticker);
    }

    Some(SentimentTable {
        tickers: tickers.into_iter().map(str::to_string).collect(),
        dates: cells.keys().copied().collect(),
        cells,
    })
}
