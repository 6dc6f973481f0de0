//! Console presentation: the two tables and a grouped text bar chart.
//!
//! Pure data-to-text translation; the empty-case branching lives with the
//! caller via [`crate::Analysis::is_empty`].

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::analysis::SentimentTable;
use crate::news::ScoredHeadline;

/// Bar length for the strongest daily mean in the chart.
const CHART_WIDTH: usize = 30;

/// The full per-headline record set as a text table.
pub fn headline_table(headlines: &[ScoredHeadline]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Ticker", "Date", "Time", "Compound", "Headline"]);
    for h in headlines {
        builder.push_record([
            h.ticker.clone(),
            h.date.to_string(),
            h.time.clone(),
            format!("{:+.3}", h.compound),
            h.title.clone(),
        ]);
    }
    builder.build().with(Style::sharp()).to_string()
}

/// The daily average pivot as a text table; absent cells render empty.
pub fn daily_table(table: &SentimentTable) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Date".to_string()];
    header.extend(table.tickers().iter().cloned());
    builder.push_record(header);

    for &date in table.dates() {
        let mut record = vec![date.to_string()];
        for ticker in table.tickers() {
            record.push(
                table
                    .get(date, ticker)
                    .map(|v| format!("{v:+.3}"))
                    .unwrap_or_default(),
            );
        }
        builder.push_record(record);
    }
    builder.build().with(Style::sharp()).to_string()
}

/// Grouped bar chart: one block per date, one signed bar per ticker, scaled
/// to the strongest daily mean across the whole table.
pub fn bar_chart(table: &SentimentTable) -> String {
    let scale = table
        .dates()
        .iter()
        .flat_map(|&d| {
            table
                .tickers()
                .iter()
                .filter_map(move |t| table.get(d, t))
        })
        .fold(0.0_f64, |m, v| m.max(v.abs()))
        .max(f64::EPSILON);

    let mut out = String::new();
    for &date in table.dates() {
        out.push_str(&format!("{date}\n"));
        for ticker in table.tickers() {
            let Some(v) = table.get(date, ticker) else {
                continue;
            };
            let len = ((v.abs() / scale) * CHART_WIDTH as f64).round() as usize;
            out.push_str(&format!("  {ticker:<6} {v:+.3} {}\n", "█".repeat(len)));
        }
    }
    out
}
