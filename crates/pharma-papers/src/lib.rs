//! pharma-papers
//!
//! Finds PubMed papers with at least one author affiliated with a
//! pharmaceutical or biotech company and renders them as a tabular report.
//!
//! # Pipeline
//!
//! - **Client**: ESearch for PMIDs, EFetch for article records (rate-limited,
//!   retried, cached)
//! - **Heuristics**: deterministic keyword/substring classification of each
//!   affiliation, plus contact email extraction
//! - **Pipeline**: one normalized report row per article with a
//!   company-affiliated author, in input order
//! - **Formatters**: CSV (default) or JSON rendering
//!
//! # Example
//!
//! ```no_run
//! use pharma_papers::{client::PubMedClient, config::Config};
//! use pharma_papers::heuristics::ClassifierRules;
//! use pharma_papers::pipeline::build_report;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PubMedClient::new(Config::from_env()?)?;
//!     let articles = client.search_and_fetch("wolfram syndrome", 100).await?;
//!     let rows = build_report(&ClassifierRules::default(), &articles);
//!     println!("{} papers with industry authors", rows.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod heuristics;
pub mod models;
pub mod pipeline;

pub use client::PubMedClient;
pub use config::Config;
pub use error::{ClientError, PipelineError};
