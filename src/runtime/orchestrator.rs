use crate::error::FeedError;
use crate::feed::parse_feed;
use crate::refine;
use crate::runtime::fetcher::{fetch_with_retry, Fetcher, RetryPolicy};
use crate::types::{FeedOutput, IngestConfig};
use chrono::{Duration, Utc};
use std::path::Path;
use std::time::Duration as StdDuration;

/// Outcome of one date's ingest within a batch run.
#[derive(Debug)]
pub enum DateStatus {
    Completed { records: usize },
    Failed { error: String },
}

#[derive(Debug)]
pub struct DateReport {
    pub date: String,
    pub status: DateStatus,
}

/// YYYYMMDD stamps for the last `days_back` nights, yesterday first.
pub fn nightly_dates(days_back: u32) -> Vec<String> {
    let today = Utc::now().date_naive();
    (1..=i64::from(days_back))
        .map(|days_ago| (today - Duration::days(days_ago)).format("%Y%m%d").to_string())
        .collect()
}

/// Ingest a range of nightly feeds. Each date is independent: a failed
/// retrieval or parse is logged and reported, and the run moves on to the
/// next date.
pub async fn ingest_range(fetcher: &dyn Fetcher, config: &IngestConfig) -> Vec<DateReport> {
    let dates = nightly_dates(config.days_back);
    tracing::info!("[Ingest] Starting batch run over {} dates", dates.len());

    let mut reports = Vec::with_capacity(dates.len());
    for date in dates {
        let status = match ingest_date(fetcher, config, &date).await {
            Ok(records) => {
                tracing::info!("[Ingest] {date}: done, {records} records");
                DateStatus::Completed { records }
            }
            Err(err) => {
                tracing::error!("[Ingest] {date} failed: {err}");
                DateStatus::Failed {
                    error: err.to_string(),
                }
            }
        };
        reports.push(DateReport { date, status });
    }

    tracing::info!("[Ingest] Batch run complete");
    reports
}

/// Fetch, parse, refine, and write one date's feed. Returns the number of
/// records written across all notice types.
pub async fn ingest_date(
    fetcher: &dyn Fetcher,
    config: &IngestConfig,
    date: &str,
) -> Result<usize, FeedError> {
    let policy = RetryPolicy {
        max_attempts: config.max_attempts,
        initial_backoff: StdDuration::from_millis(config.initial_backoff_ms),
    };

    let lines = fetch_with_retry(fetcher, date, policy).await?;
    tracing::info!("[Ingest] {date}: fetched {} lines", lines.len());

    let mut output = parse_feed(&lines)?;
    apply_refinements(&mut output, config);

    let total = output.values().map(Vec::len).sum();
    write_output(&output, config, date)?;
    Ok(total)
}

fn apply_refinements(output: &mut FeedOutput, config: &IngestConfig) {
    for records in output.values_mut() {
        if let Some(field) = &config.required_field {
            refine::retain_with_field(records, field);
        }
        if let Some(agencies) = &config.agencies {
            refine::retain_by_agency(records, agencies);
        }
        if let Some(naics) = &config.naics {
            refine::retain_naics_prefix(records, naics);
        }
        if config.display_names {
            for record in records.iter_mut() {
                *record = refine::display_names(record);
            }
        }
    }
}

fn write_output(output: &FeedOutput, config: &IngestConfig, date: &str) -> Result<(), FeedError> {
    let out_dir = Path::new(&config.out_dir);
    std::fs::create_dir_all(out_dir).map_err(|e| FeedError::Output {
        path: config.out_dir.clone(),
        reason: e.to_string(),
    })?;

    let path = out_dir.join(format!("fbo_nightly_{date}.json"));
    let json = serde_json::to_string(output).map_err(|e| FeedError::Output {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    std::fs::write(&path, json).map_err(|e| FeedError::Output {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
