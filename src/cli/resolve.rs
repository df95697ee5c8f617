//! Resolve command - poll mergeability and print the merge commit

use crate::cli::SpinnerProgress;
use crate::cli::style::{Stylize, check, spinner_style};
use anstream::println;
use indicatif::ProgressBar;
use mergewatch::config::{self, TOKEN_ENV_VAR};
use mergewatch::error::Result;
use mergewatch::platform::{GitHubMergeService, parse_pr_ref};
use mergewatch::resolver::resolve_merge_commit;
use mergewatch::types::Resolution;
use std::time::Duration;

/// Options for the resolve command
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// PR reference: `owner/repo#number` or a full PR URL
    pub pr: String,
    /// GitHub Enterprise host (None for github.com)
    pub host: Option<String>,
    /// Override for the retry budget
    pub max_retries: Option<u32>,
    /// Override for the base backoff in seconds
    pub base_delay_secs: Option<u64>,
    /// Full API base URL, overriding `host` (for tests against a local server)
    pub api_base: Option<String>,
}

/// Run the resolve command
pub async fn run_resolve(options: ResolveOptions) -> Result<Resolution> {
    // Parse the reference before touching config so bad input fails fast
    let pr = parse_pr_ref(&options.pr)?;

    let config = config::load_default_config()?;
    let token = config.resolve_token(std::env::var(TOKEN_ENV_VAR).ok())?;
    let policy = config.retry_policy(options.max_retries, options.base_delay_secs);

    let service = match options.api_base {
        Some(ref base) => GitHubMergeService::from_api_base(&token, base.clone())?,
        None => GitHubMergeService::new(&token, options.host.as_deref())?,
    };

    // Spinner while polling; worst case is policy.max_total_delay()
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Checking mergeability of {}...", pr.accent()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let progress = SpinnerProgress::new(spinner.clone());
    let result = resolve_merge_commit(&service, &pr, &policy, &progress).await;

    match &result {
        Ok(Resolution::Resolved(sha)) => {
            spinner.finish_with_message(format!(
                "{} {} is mergeable",
                check(),
                pr.accent()
            ));
            println!("{}", format!("Merge commit: {sha}").success());
            // Plain SHA on its own line for machine consumption
            println!("{sha}");
        }
        Ok(Resolution::Unmergeable) => {
            spinner.finish_with_message(format!(
                "{} {} has conflicts",
                "✗".warn(),
                pr.accent()
            ));
            println!("{}", "No merge commit exists; skipping downstream work.".muted());
        }
        Err(_) => {
            // Let main print the error; don't leave a stale spinner line
            spinner.finish_and_clear();
        }
    }

    result
}
