//! Extract (date token, time token, headline) rows from the news table.

use scraper::{ElementRef, Html, Selector};

use super::model::RawNewsRow;

/// Parse the rows of a news table fragment, in document order.
///
/// A row without a hyperlink is a section header, not a headline; it is
/// skipped. The timestamp cell is the row's first `td`, split on whitespace:
/// two or more tokens mean (date, time), a single token means the date was
/// omitted and only a time is present.
pub(crate) fn parse_rows(ticker: &str, table_html: &str) -> Vec<RawNewsRow> {
    let fragment = Html::parse_fragment(table_html);
    let tr = Selector::parse("tr").expect("static selector");
    let a = Selector::parse("a").expect("static selector");
    let td = Selector::parse("td").expect("static selector");

    let mut rows = Vec::new();
    for row in fragment.select(&tr) {
        let Some(link) = row.select(&a).next() else {
            continue;
        };
        let title = text_of(link);

        let Some(cell) = row.select(&td).next() else {
            continue;
        };
        let stamp = text_of(cell);
        let mut tokens = stamp.split_whitespace();
        let (date, time) = match (tokens.next(), tokens.next()) {
            (Some(d), Some(t)) => (Some(d.to_string()), t.to_string()),
            (Some(t), None) => (None, t.to_string()),
            // Empty timestamp cell: nothing to anchor the row to.
            _ => continue,
        };

        rows.push(RawNewsRow {
            ticker: ticker.to_string(),
            date,
            time,
            title,
        });
    }
    rows
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
