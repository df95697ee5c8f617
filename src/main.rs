//! mergewatch binary entry point

mod cli;

use anstream::eprintln;
use clap::Parser;
use cli::ResolveOptions;
use cli::style::Stylize;
use mergewatch::error::Error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Resolve a pull request's merge commit for CI checkout
///
/// Polls the GitHub API while mergeability is still being computed, using
/// exponential backoff, then prints the merge-commit SHA. Exits 0 when the
/// PR is resolved or cleanly conflicted, 3 when the status never settled
/// within the retry budget, and 1 for any other failure.
#[derive(Debug, Parser)]
#[command(name = "mergewatch", version, about, verbatim_doc_comment)]
struct Cli {
    /// Pull request to resolve: `owner/repo#number` or a full PR URL
    pr: String,

    /// GitHub Enterprise host (e.g. github.corp.example)
    #[arg(long)]
    host: Option<String>,

    /// Retries after the initial query (default 5, or the config file)
    #[arg(long)]
    max_retries: Option<u32>,

    /// Base backoff in seconds, doubling per retry (default 5, or the config file)
    #[arg(long)]
    base_delay: Option<u64>,

    /// Full API base URL, overriding --host (for testing against a local server)
    #[arg(long, hide = true)]
    api_base: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-consumable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let options = ResolveOptions {
        pr: args.pr,
        host: args.host,
        max_retries: args.max_retries,
        base_delay_secs: args.base_delay,
        api_base: args.api_base,
    };

    match cli::run_resolve(options).await {
        Ok(_) => ExitCode::SUCCESS,
        // 3 rather than 2: clap already exits 2 on usage errors, and the
        // enclosing automation needs to tell the two apart
        Err(e @ Error::StatusTimeout { .. }) => {
            eprintln!("{}", format!("Error: {e}").warn());
            ExitCode::from(3)
        }
        Err(e) => {
            eprintln!("{}", format!("Error: {e}").warn());
            ExitCode::FAILURE
        }
    }
}
