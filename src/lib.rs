//! mergewatch - resolve a pull request's merge commit for CI checkout
//!
//! GitHub computes a PR's mergeability asynchronously: the API reports
//! `mergeable: null` until a test merge has been attempted, then settles on
//! `true` (with a merge-commit SHA) or `false` (conflicts). Automation that
//! wants to check out the merge result has to poll until the status
//! stabilizes.
//!
//! This crate does exactly that: it polls the pulls endpoint with bounded
//! exponential backoff and resolves to the merge-commit SHA, a clean
//! "conflicted, skip downstream work" outcome, or a timeout once the retry
//! budget is spent. Transport-level failures are never retried.

pub mod config;
pub mod error;
pub mod platform;
pub mod resolver;
pub mod types;
