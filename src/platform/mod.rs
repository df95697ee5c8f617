//! Remote mergeability queries
//!
//! Provides the query seam the resolver polls, plus the GitHub-backed
//! implementation and pull-request reference parsing.

mod github;
mod parse;

pub use github::GitHubMergeService;
pub use parse::parse_pr_ref;

use crate::error::Result;
use crate::types::{Mergeability, PullRequestRef};
use async_trait::async_trait;

/// Query service for a pull request's computed mergeability
///
/// This trait abstracts the hosting platform's API so the resolver's
/// retry logic can be exercised against a scripted implementation.
#[async_trait]
pub trait MergeQueryService: Send + Sync {
    /// Ask the remote whether the PR is mergeable
    ///
    /// Returns `Mergeability::Pending` while the remote is still computing.
    /// Any `Err` is a transport-level failure (network, auth, rate-limit)
    /// and must not be retried by callers.
    async fn query_mergeability(&self, pr: &PullRequestRef) -> Result<Mergeability>;
}
