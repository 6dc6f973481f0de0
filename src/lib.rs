//! finviz-sentiment: Finviz headline scraping and daily sentiment aggregation.
//!
//! The crate fetches the news table from a ticker's Finviz quote page, parses
//! the headline rows, normalizes their timestamps, scores each headline with a
//! VADER analyzer, and averages the compound score per (ticker, day).
//!
//! ```no_run
//! use finviz_sentiment::{AnalysisBuilder, FvClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FvClient::default();
//!     let analysis = AnalysisBuilder::new(&client)
//!         .tickers(["NVDA", "META", "GOOG"])
//!         .run()
//!         .await;
//!
//!     match analysis.daily() {
//!         Some(table) => println!("{}", finviz_sentiment::render::daily_table(table)),
//!         None => println!("no usable headlines"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod core;
pub mod news;
pub mod render;
pub mod sentiment;

pub use crate::analysis::{Analysis, AnalysisBuilder, SentimentTable, parse_ticker_list};
pub use crate::core::{FvClient, FvClientBuilder, FvError};
pub use crate::news::{DateFill, NewsBuilder, RawNewsRow, ScoredHeadline};
pub use crate::sentiment::{SentimentModel, VaderModel};
