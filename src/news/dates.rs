//! Normalize the raw date tokens Finviz prints into calendar dates.

use chrono::{Datelike, NaiveDate};

/// How to treat a news row whose timestamp cell carried only a time token.
///
/// Finviz prints the date once and then omits it on the following rows of the
/// same day, so [`DateFill::Forward`] reconstructs what the page displays.
/// [`DateFill::Drop`] keeps only rows with an explicit date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFill {
    /// Reuse the most recent explicit date seen for the same ticker.
    #[default]
    Forward,
    /// Drop the row.
    Drop,
}

/// Parse one raw date token against a context date.
///
/// The known Finviz formats are tried in order ("Jan-05-24", "Jan 05" with the
/// context year, "01/05/24"), then the relative tokens `Today`/`Yesterday`,
/// then a short list of best-effort fallbacks. `None` means the row must be
/// dropped, never defaulted.
pub(crate) fn parse_news_date(raw: &str, context: NaiveDate) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(d) = NaiveDate::parse_from_str(raw, "%b-%d-%y") {
        return Some(d);
    }
    // "Jan 05" carries no year; borrow it from the parse context.
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{raw} {}", context.year()), "%b %d %Y") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%m/%d/%y") {
        return Some(d);
    }

    best_effort(raw, context)
}

fn best_effort(raw: &str, context: NaiveDate) -> Option<NaiveDate> {
    match raw.to_ascii_lowercase().as_str() {
        "today" => return Some(context),
        "yesterday" => return context.pred_opt(),
        _ => {}
    }

    const FALLBACK: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%b-%d-%Y", "%d-%b-%y"];
    FALLBACK
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}
