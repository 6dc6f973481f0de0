//! Interactive console: one request/response cycle per line of
//! comma-separated tickers. No state is retained between cycles.

use std::io::{self, BufRead, Write};

use finviz_sentiment::{AnalysisBuilder, FvClient, parse_ticker_list, render};

#[tokio::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = match FvClient::builder().build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("client setup failed: {e}");
            return Ok(());
        }
    };

    println!("Stock news sentiment console.");
    println!("Enter comma-separated tickers (e.g. NVDA, META, GOOG); blank line to quit.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        let tickers = parse_ticker_list(line);
        println!("Fetching latest news and computing sentiment...");
        let analysis = AnalysisBuilder::new(&client)
            .tickers(tickers)
            .run()
            .await;

        let Some(table) = analysis.daily() else {
            println!("error: no data found; Finviz may have blocked requests");
            continue;
        };

        println!("{}", render::headline_table(analysis.headlines()));
        println!();
        println!("Daily average sentiment per ticker");
        println!("{}", render::daily_table(table));
        println!();
        println!("{}", render::bar_chart(table));
    }

    Ok(())
}
