#![allow(dead_code)]
use async_trait::async_trait;
use fbo_ingest::error::FeedError;
use fbo_ingest::runtime::fetcher::Fetcher;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};

pub fn fixtures_dir() -> String {
    format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

pub fn load_fixture(filename: &str) -> String {
    let path = Path::new(&fixtures_dir()).join(filename);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

pub fn fixture_lines(filename: &str) -> Vec<String> {
    load_fixture(filename).lines().map(str::to_string).collect()
}

/// Fetcher returning canned lines, optionally failing the first N calls.
pub struct MockFetcher {
    pub lines: Vec<String>,
    pub fail_first: u32,
    pub calls: AtomicU32,
}

impl MockFetcher {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            fail_first: 0,
            calls: AtomicU32::new(0),
        }
    }

    pub fn failing_first(lines: Vec<String>, fail_first: u32) -> Self {
        Self {
            lines,
            fail_first,
            calls: AtomicU32::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch_lines(&self, date: &str) -> Result<Vec<String>, FeedError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.fail_first {
            return Err(FeedError::Retrieval {
                date: date.to_string(),
                reason: "mock transport failure".to_string(),
            });
        }
        Ok(self.lines.clone())
    }
}
