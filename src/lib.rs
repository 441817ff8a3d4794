pub mod error;
pub mod feed;
pub mod refine;
pub mod runtime;
pub mod types;
