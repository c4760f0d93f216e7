//! pharma-papers - Entry Point
//!
//! Searches PubMed, classifies author affiliations, writes the report to a
//! file or stdout.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pharma_papers::config::api;
use pharma_papers::heuristics::ClassifierRules;
use pharma_papers::pipeline::build_report;
use pharma_papers::{Config, PubMedClient, formatters};

#[derive(Parser, Debug)]
#[command(name = "pharma-papers")]
#[command(about = "Find PubMed papers with pharma/biotech company-affiliated authors")]
#[command(version)]
struct Cli {
    /// PubMed search query (supports full PubMed query syntax)
    query: String,

    /// Filename to save results. Prints to stdout if not provided
    #[arg(short, long)]
    file: Option<std::path::PathBuf>,

    /// Maximum number of papers to retrieve
    #[arg(short, long, default_value_t = api::DEFAULT_MAX_RESULTS)]
    max: usize,

    /// Output format
    #[arg(long, default_value = "csv")]
    format: OutputFormat,

    /// NCBI API key (optional, raises the rate limit to 10 req/s)
    #[arg(long, env = "NCBI_API_KEY")]
    api_key: Option<String>,

    /// Contact email sent with E-utilities requests
    #[arg(long, env = "ENTREZ_EMAIL")]
    email: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// Pretty-printed JSON array
    Json,
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "pharma_papers=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(cli.debug);

    tracing::debug!(query = cli.query.as_str(), max = cli.max, "searching PubMed");

    let config = Config::new(cli.api_key, cli.email);
    let client = PubMedClient::new(config)?;

    let articles = client.search_and_fetch(&cli.query, cli.max).await?;
    if articles.is_empty() {
        eprintln!("No papers found matching the query.");
        return Ok(());
    }

    let rules = ClassifierRules::default();
    let rows = build_report(&rules, &articles);
    if rows.is_empty() {
        eprintln!("No papers with pharmaceutical/biotech company affiliations found.");
        return Ok(());
    }

    let output = match cli.format {
        OutputFormat::Csv => formatters::format_report_csv(&rows),
        OutputFormat::Json => formatters::format_report_json(&rows)?,
    };

    formatters::write_report(&output, cli.file.as_deref())?;
    if let Some(path) = &cli.file {
        eprintln!("Results saved to {} ({} papers)", path.display(), rows.len());
    }

    Ok(())
}
