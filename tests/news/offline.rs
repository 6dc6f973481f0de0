use httpmock::Method::GET;

use finviz_sentiment::{FvError, NewsBuilder};

fn fixture(symbol: &str) -> String {
    crate::common::fixture("quote", symbol, "html")
}

#[tokio::test]
async fn offline_news_parses_fixture_rows() {
    let server = crate::common::setup_server();
    let sym = "NVDA";

    let mock = server.mock(|when, then| {
        when.method(GET).path("/quote.ashx").query_param("t", sym);
        then.status(200)
            .header("content-type", "text/html")
            .body(fixture(sym));
    });

    let client = crate::common::quote_client(&server);
    let rows = NewsBuilder::new(&client, sym).fetch().await.unwrap().unwrap();

    mock.assert();

    // The section-header row carries no link and is skipped.
    assert_eq!(rows.len(), 3);

    let first = &rows[0];
    assert_eq!(first.ticker, "NVDA");
    assert_eq!(first.date.as_deref(), Some("Jan-05-24"));
    assert_eq!(first.time, "09:15AM");
    assert_eq!(first.title, "Nvidia hits record high as AI demand soars");

    // Second row reuses the page's running date: only a time token.
    assert_eq!(rows[1].date, None);
    assert_eq!(rows[1].time, "08:30AM");
}

#[tokio::test]
async fn symbol_is_uppercased_before_the_request() {
    let server = crate::common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/quote.ashx").query_param("t", "NVDA");
        then.status(200)
            .header("content-type", "text/html")
            .body(fixture("NVDA"));
    });

    let client = crate::common::quote_client(&server);
    let rows = NewsBuilder::new(&client, " nvda ").fetch().await.unwrap();

    mock.assert();
    assert!(rows.is_some());
}

#[tokio::test]
async fn page_without_news_table_is_absent_not_an_error() {
    let server = crate::common::setup_server();

    server.mock(|when, then| {
        when.method(GET).path("/quote.ashx").query_param("t", "EMPTY");
        then.status(200)
            .header("content-type", "text/html")
            .body(fixture("EMPTY"));
    });

    let client = crate::common::quote_client(&server);
    let rows = NewsBuilder::new(&client, "EMPTY").fetch().await.unwrap();
    assert!(rows.is_none());
}

#[tokio::test]
async fn non_success_status_surfaces_as_status_error() {
    let server = crate::common::setup_server();

    server.mock(|when, then| {
        when.method(GET).path("/quote.ashx").query_param("t", "NVDA");
        then.status(403).body("blocked");
    });

    let client = crate::common::quote_client(&server);
    let err = NewsBuilder::new(&client, "NVDA").fetch().await.unwrap_err();

    match err {
        FvError::Status { status, .. } => assert_eq!(status, 403),
        other => panic!("expected status error, got {other}"),
    }
}
