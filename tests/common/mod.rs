//! Shared test fixtures

pub mod mock_service;

use mergewatch::types::PullRequestRef;

/// A PR reference fixture used across tests
pub fn test_pr() -> PullRequestRef {
    PullRequestRef::new("octo", "demo", 42)
}
