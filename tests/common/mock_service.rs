//! Scripted mock query service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use mergewatch::error::{Error, Result};
use mergewatch::platform::MergeQueryService;
use mergewatch::types::{Mergeability, PullRequestRef};
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted response: a query result or an injected transport error
enum Scripted {
    Result(Mergeability),
    TransportError(String),
}

/// Mock query service returning a scripted sequence of responses
///
/// Each call to `query_mergeability` consumes the next scripted response
/// in order. Running past the end of the script is a test bug and returns
/// an error naming it, matching how real misconfiguration would surface.
///
/// Features:
/// - Ordered response scripting
/// - Call tracking for verification
/// - Transport error injection for failure path testing
pub struct MockMergeService {
    responses: Mutex<VecDeque<Scripted>>,
    queries: Mutex<Vec<PullRequestRef>>,
}

impl MockMergeService {
    /// Create a mock with an empty script
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Append a query result to the script
    pub fn enqueue(&self, result: Mergeability) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Scripted::Result(result));
    }

    /// Append `count` `Pending` results to the script
    pub fn enqueue_pending(&self, count: usize) {
        for _ in 0..count {
            self.enqueue(Mergeability::Pending);
        }
    }

    /// Append a transport-level error to the script
    pub fn enqueue_transport_error(&self, msg: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Scripted::TransportError(msg.to_string()));
    }

    /// Number of queries issued so far
    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    /// All PR references queried, in order
    pub fn queries(&self) -> Vec<PullRequestRef> {
        self.queries.lock().unwrap().clone()
    }

    /// Assert the resolver issued exactly this many queries
    pub fn assert_query_count(&self, expected: usize) {
        let actual = self.query_count();
        assert_eq!(
            actual, expected,
            "expected {expected} queries but {actual} were issued"
        );
    }
}

#[async_trait]
impl MergeQueryService for MockMergeService {
    async fn query_mergeability(&self, pr: &PullRequestRef) -> Result<Mergeability> {
        self.queries.lock().unwrap().push(pr.clone());

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Result(result)) => Ok(result),
            Some(Scripted::TransportError(msg)) => Err(Error::GitHubApi(msg)),
            None => Err(Error::Internal(format!(
                "query_mergeability: no response scripted for {pr}"
            ))),
        }
    }
}
