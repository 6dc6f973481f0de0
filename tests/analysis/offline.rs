use chrono::NaiveDate;
use httpmock::Method::GET;

use finviz_sentiment::news::DateFill;
use finviz_sentiment::{AnalysisBuilder, render};

fn fixture(symbol: &str) -> String {
    crate::common::fixture("quote", symbol, "html")
}

fn mock_quote(server: &httpmock::MockServer, symbol: &str) {
    let body = fixture(symbol);
    server.mock(|when, then| {
        when.method(GET).path("/quote.ashx").query_param("t", symbol);
        then.status(200)
            .header("content-type", "text/html")
            .body(body);
    });
}

fn ctx() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

#[tokio::test]
async fn pipeline_aggregates_daily_means_across_tickers() {
    let server = crate::common::setup_server();
    mock_quote(&server, "NVDA");
    mock_quote(&server, "META");

    let client = crate::common::quote_client(&server);
    let analysis = AnalysisBuilder::new(&client)
        .tickers(["nvda", " meta "])
        .context_date(ctx())
        .run()
        .await;

    // 3 NVDA rows (one forward-filled) + 2 META rows.
    assert_eq!(analysis.headlines().len(), 5);

    let table = analysis.daily().expect("non-empty run yields a table");
    assert_eq!(table.tickers(), ["META", "NVDA"]);

    let jan3 = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    let jan4 = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
    let jan5 = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();

    // Union of dates across tickers, ascending.
    assert_eq!(table.dates(), [jan3, jan4, jan5]);

    // A date one ticker never saw leaves that cell absent.
    assert!(table.get(jan3, "META").is_some());
    assert!(table.get(jan3, "NVDA").is_none());
    assert!(table.get(jan4, "NVDA").is_some());
    assert!(table.get(jan4, "META").is_none());

    for &date in table.dates() {
        for ticker in table.tickers() {
            if let Some(v) = table.get(date, ticker) {
                assert!((-1.0..=1.0).contains(&v));
            }
        }
    }
}

#[tokio::test]
async fn drop_mode_discards_the_dateless_row() {
    let server = crate::common::setup_server();
    mock_quote(&server, "NVDA");

    let client = crate::common::quote_client(&server);
    let analysis = AnalysisBuilder::new(&client)
        .tickers(["NVDA"])
        .context_date(ctx())
        .date_fill(DateFill::Drop)
        .run()
        .await;

    // The 08:30AM row has no date token and is dropped instead of filled.
    assert_eq!(analysis.headlines().len(), 2);
}

#[tokio::test]
async fn failed_ticker_is_skipped_and_the_run_continues() {
    let server = crate::common::setup_server();
    mock_quote(&server, "NVDA");
    server.mock(|when, then| {
        when.method(GET).path("/quote.ashx").query_param("t", "BAD");
        then.status(404).body("not found");
    });

    let client = crate::common::quote_client(&server);
    let analysis = AnalysisBuilder::new(&client)
        .tickers(["BAD", "NVDA"])
        .context_date(ctx())
        .run()
        .await;

    assert!(!analysis.is_empty());
    assert!(analysis.headlines().iter().all(|h| h.ticker == "NVDA"));
    assert_eq!(analysis.daily().unwrap().tickers(), ["NVDA"]);
}

#[tokio::test]
async fn all_fetches_failing_surfaces_the_empty_result() {
    let server = crate::common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/quote.ashx");
        then.status(503).body("unavailable");
    });

    let client = crate::common::quote_client(&server);
    let analysis = AnalysisBuilder::new(&client)
        .tickers(["NVDA", "META"])
        .run()
        .await;

    assert!(analysis.is_empty());
    assert!(analysis.daily().is_none());
}

#[tokio::test]
async fn renderers_cover_the_non_empty_result() {
    let server = crate::common::setup_server();
    mock_quote(&server, "META");

    let client = crate::common::quote_client(&server);
    let analysis = AnalysisBuilder::new(&client)
        .tickers(["META"])
        .context_date(ctx())
        .run()
        .await;

    let table = analysis.daily().unwrap();
    let headlines = render::headline_table(analysis.headlines());
    assert!(headlines.contains("Meta faces fresh lawsuit over data practices"));

    let daily = render::daily_table(table);
    assert!(daily.contains("META"));
    assert!(daily.contains("2024-01-05"));

    let chart = render::bar_chart(table);
    assert!(chart.contains("2024-01-03"));
    assert!(chart.contains("META"));
}
