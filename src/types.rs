//! Core types for mergewatch

use serde::{Deserialize, Serialize};

/// A pull request in a specific repository
///
/// Immutable identity supplied by the caller; everything downstream
/// (queries, retry state, resolution) hangs off this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequestRef {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// PR number
    pub number: u64,
}

impl PullRequestRef {
    /// Create a new reference
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, number: u64) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            number,
        }
    }
}

impl std::fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// Result of a single mergeability query
///
/// GitHub reports mergeability as `bool | null` where `null` means the
/// merge commit is still being computed. Modeling that as an explicit
/// variant keeps "unknown" from leaking through as a nullable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mergeability {
    /// The remote has not finished computing mergeability yet
    Pending,
    /// The PR is mergeable; carries the merge-commit SHA
    Mergeable(String),
    /// The PR has conflicts; no merge commit exists
    Conflicted,
}

/// Terminal outcome of a resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The PR is mergeable; downstream should check out this commit
    Resolved(String),
    /// The PR is conflicted; downstream work should be skipped, not failed
    Unmergeable,
}

impl Resolution {
    /// The resolved merge-commit SHA, if any
    pub fn merge_commit(&self) -> Option<&str> {
        match self {
            Self::Resolved(sha) => Some(sha),
            Self::Unmergeable => None,
        }
    }
}
