use chrono::NaiveDate;
use serde::Serialize;

/// One row lifted from the Finviz news table, before any normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawNewsRow {
    /// The symbol whose quote page yielded this row.
    pub ticker: String,
    /// The date token of the timestamp cell, when the row carried one.
    pub date: Option<String>,
    /// The time token of the timestamp cell (e.g. "09:15AM").
    pub time: String,
    /// The trimmed headline text.
    pub title: String,
}

/// A headline with a resolved calendar date and a sentiment score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredHeadline {
    /// The symbol whose quote page yielded this headline.
    pub ticker: String,
    /// The resolved publication date.
    pub date: NaiveDate,
    /// The time token as it appeared on the page.
    pub time: String,
    /// The headline text.
    pub title: String,
    /// VADER compound polarity, in `[-1.0, 1.0]`.
    pub compound: f64,
}
