//! GitHub mergeability queries over the REST API

use crate::error::{Error, Result};
use crate::platform::MergeQueryService;
use crate::types::{Mergeability, PullRequestRef};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// The slice of the pulls endpoint response we care about
///
/// `mergeable` is GitHub's tri-state: `null` while the test merge is being
/// computed, then `true`/`false` once it settles.
#[derive(Deserialize)]
struct PullResponse {
    mergeable: Option<bool>,
    merge_commit_sha: Option<String>,
}

/// GitHub service using raw REST requests
pub struct GitHubMergeService {
    http_client: Client,
    token: String,
    /// Base URL including scheme, no trailing slash (e.g. `https://api.github.com`)
    api_base: String,
}

impl GitHubMergeService {
    /// Create a service for github.com or a GitHub Enterprise host
    pub fn new(token: &str, host: Option<&str>) -> Result<Self> {
        let api_base = match host {
            Some(h) => format!("https://{h}/api/v3"),
            None => "https://api.github.com".to_string(),
        };
        Self::from_api_base(token, api_base)
    }

    /// Create a service against an explicit API base URL
    ///
    /// Used by tests to point at a local mock server; `new` delegates here.
    pub fn from_api_base(token: &str, api_base: String) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent("mergewatch")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            token: token.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl MergeQueryService for GitHubMergeService {
    async fn query_mergeability(&self, pr: &PullRequestRef) -> Result<Mergeability> {
        let url = format!(
            "{}/repos/{}/{}/pulls/{}",
            self.api_base, pr.owner, pr.repo, pr.number
        );
        debug!(%pr, "querying mergeability");

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to fetch {pr}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%pr, %status, "mergeability query returned non-success");
            return Err(Error::GitHubApi(format!(
                "GET {url} returned {status} for {pr}"
            )));
        }

        let pull: PullResponse = response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse response for {pr}: {e}")))?;

        let result = match pull.mergeable {
            None => Mergeability::Pending,
            Some(true) => {
                let sha = pull.merge_commit_sha.ok_or_else(|| {
                    Error::GitHubApi(format!("{pr} reported mergeable but no merge commit SHA"))
                })?;
                Mergeability::Mergeable(sha)
            }
            Some(false) => Mergeability::Conflicted,
        };

        debug!(%pr, result = ?result, "mergeability query complete");
        Ok(result)
    }
}
