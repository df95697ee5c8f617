//! Mergeability resolution with bounded retry
//!
//! Two-part pattern matching platform/:
//! 1. Policy - retry budget and backoff schedule (pure, testable)
//! 2. Resolve - poll the remote until the status settles (effectful)

mod policy;
mod resolve;

pub use policy::{DEFAULT_BASE_DELAY_SECS, DEFAULT_MAX_RETRIES, RetryPolicy};
pub use resolve::{NoProgress, ProgressCallback, resolve_merge_commit};
