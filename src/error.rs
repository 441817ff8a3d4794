use thiserror::Error;

/// Error taxonomy for a single nightly-feed ingest.
///
/// A `MalformedFeed` aborts the whole parse for that date: once record
/// boundaries are desynchronized, partial output cannot be trusted.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to retrieve nightly feed for {date}: {reason}")]
    Retrieval { date: String, reason: String },
    #[error("malformed feed: {0}")]
    MalformedFeed(String),
    #[error("failed to write output {path}: {reason}")]
    Output { path: String, reason: String },
}
