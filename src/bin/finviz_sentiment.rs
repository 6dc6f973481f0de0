//! Batch CLI: analyze a fixed or argv-supplied ticker list and print the
//! headline table, the daily average table, and the sentiment bar chart.

use std::process::ExitCode;

use finviz_sentiment::{AnalysisBuilder, FvClient, parse_ticker_list, render};

const DEFAULT_TICKERS: &str = "AMZN, GOOG, META";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let tickers = if args.is_empty() {
        parse_ticker_list(DEFAULT_TICKERS)
    } else {
        args.iter()
            .flat_map(|arg| parse_ticker_list(arg))
            .collect()
    };

    let client = match FvClient::builder().build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("client setup failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let analysis = AnalysisBuilder::new(&client).tickers(tickers).run().await;

    let Some(table) = analysis.daily() else {
        println!("No data scraped. Finviz may have blocked requests or changed its HTML layout.");
        return ExitCode::SUCCESS;
    };

    println!("{}", render::headline_table(analysis.headlines()));
    println!();
    println!("Average sentiment per ticker over time");
    println!("{}", render::daily_table(table));
    println!();
    println!("{}", render::bar_chart(table));
    ExitCode::SUCCESS
}
