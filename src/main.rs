use fbo_ingest::runtime::fetcher::HttpFetcher;
use fbo_ingest::runtime::orchestrator::{ingest_range, DateStatus};
use fbo_ingest::types::IngestConfig;

const DEFAULT_BASE_URL: &str = "https://ftp.fbo.gov/FBOFeed";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.len() != 2 {
        eprintln!("Usage: fbo-ingest <days_back> <output_dir>");
        eprintln!("  FBO_FEED_BASE_URL overrides the feed base URL");
        std::process::exit(2);
    }

    let days_back: u32 = match args[0].parse() {
        Ok(days) => days,
        Err(_) => {
            eprintln!("days_back must be a non-negative integer, got {:?}", args[0]);
            std::process::exit(2);
        }
    };
    let out_dir = args[1].clone();
    let base_url =
        std::env::var("FBO_FEED_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let config = IngestConfig {
        base_url: base_url.clone(),
        days_back,
        out_dir,
        max_attempts: 3,
        initial_backoff_ms: 2000,
        required_field: None,
        agencies: None,
        naics: None,
        display_names: false,
    };

    let fetcher = HttpFetcher::new(reqwest::Client::new(), base_url);
    let reports = ingest_range(&fetcher, &config).await;

    let failed = reports
        .iter()
        .filter(|report| matches!(report.status, DateStatus::Failed { .. }))
        .count();
    for report in &reports {
        match &report.status {
            DateStatus::Completed { records } => {
                tracing::info!("[Ingest] {}: {records} records", report.date);
            }
            DateStatus::Failed { error } => {
                tracing::error!("[Ingest] {}: {error}", report.date);
            }
        }
    }

    if !reports.is_empty() && failed == reports.len() {
        std::process::exit(1);
    }
}
