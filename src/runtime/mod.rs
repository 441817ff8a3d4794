pub mod fetcher;
pub mod orchestrator;
