//! Pull request reference parsing

use crate::error::{Error, Result};
use crate::types::PullRequestRef;
use url::Url;

/// Parse a pull request reference from user input
///
/// Accepts two forms:
/// - `owner/repo#number` (e.g. `rust-lang/rust#1234`)
/// - a full PR URL (e.g. `https://github.com/rust-lang/rust/pull/1234`),
///   including GitHub Enterprise hosts
pub fn parse_pr_ref(input: &str) -> Result<PullRequestRef> {
    if input.starts_with("http://") || input.starts_with("https://") {
        return parse_pr_url(input);
    }
    parse_short_form(input)
}

fn parse_short_form(input: &str) -> Result<PullRequestRef> {
    let (repo_part, number_part) = input
        .split_once('#')
        .ok_or_else(|| invalid(input, "expected owner/repo#number"))?;

    let (owner, repo) = repo_part
        .split_once('/')
        .ok_or_else(|| invalid(input, "expected owner/repo#number"))?;

    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return Err(invalid(input, "expected owner/repo#number"));
    }

    let number = number_part
        .parse::<u64>()
        .map_err(|_| invalid(input, "PR number is not a positive integer"))?;

    Ok(PullRequestRef::new(owner, repo, number))
}

fn parse_pr_url(input: &str) -> Result<PullRequestRef> {
    let url = Url::parse(input).map_err(|e| invalid(input, &format!("not a valid URL: {e}")))?;

    // Expect a path of the form /{owner}/{repo}/pull/{number}
    let segments: Vec<&str> = url
        .path_segments()
        .map(Iterator::collect)
        .unwrap_or_default();

    match segments.as_slice() {
        [owner, repo, "pull", number] if !owner.is_empty() && !repo.is_empty() => {
            let number = number
                .parse::<u64>()
                .map_err(|_| invalid(input, "PR number is not a positive integer"))?;
            Ok(PullRequestRef::new(*owner, *repo, number))
        }
        _ => Err(invalid(input, "expected .../{owner}/{repo}/pull/{number}")),
    }
}

fn invalid(input: &str, reason: &str) -> Error {
    Error::InvalidPrRef(format!("{input} ({reason})"))
}
