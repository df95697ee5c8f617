//! The resolution loop - polls the remote until mergeability settles

use crate::error::{Error, Result};
use crate::platform::MergeQueryService;
use crate::resolver::policy::RetryState;
use crate::resolver::RetryPolicy;
use crate::types::{Mergeability, PullRequestRef, Resolution};
use async_trait::async_trait;
use tokio::time::sleep;
use tracing::debug;

/// Progress callback for status updates during resolution
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Report a human-readable status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for non-interactive callers and tests
pub struct NoProgress;

#[async_trait]
impl ProgressCallback for NoProgress {
    async fn on_message(&self, _message: &str) {}
}

/// Resolve a pull request to its merge commit (EFFECTFUL)
///
/// Polls the remote for the PR's computed mergeability, sleeping with
/// exponentially doubling backoff while the remote reports it is still
/// computing. Exactly one outcome is produced per invocation:
///
/// - `Ok(Resolution::Resolved(sha))` - the PR is mergeable
/// - `Ok(Resolution::Unmergeable)` - the PR has conflicts (terminal,
///   not an error; callers should skip downstream work)
/// - `Err(Error::StatusTimeout)` - still pending after the whole budget
/// - any other `Err` - transport-level failure, propagated on first
///   occurrence with no retry and no backoff delay
pub async fn resolve_merge_commit(
    service: &dyn MergeQueryService,
    pr: &PullRequestRef,
    policy: &RetryPolicy,
    progress: &dyn ProgressCallback,
) -> Result<Resolution> {
    let mut state = RetryState::initial(policy);

    loop {
        debug!(%pr, attempts_remaining = state.attempts_remaining, "querying mergeability");

        match service.query_mergeability(pr).await? {
            Mergeability::Mergeable(sha) => {
                debug!(%pr, %sha, "resolved merge commit");
                return Ok(Resolution::Resolved(sha));
            }
            Mergeability::Conflicted => {
                debug!(%pr, "PR has conflicts, no merge commit");
                return Ok(Resolution::Unmergeable);
            }
            Mergeability::Pending => {
                if state.attempts_remaining == 0 {
                    debug!(%pr, queries = policy.max_queries(), "retry budget exhausted");
                    return Err(Error::StatusTimeout {
                        pr: pr.to_string(),
                        attempts: policy.max_queries(),
                    });
                }

                progress
                    .on_message(&format!(
                        "Merge status still computing, retrying in {}s...",
                        state.backoff.as_secs()
                    ))
                    .await;

                sleep(state.backoff).await;
                state = state.after_retry();
            }
        }
    }
}
