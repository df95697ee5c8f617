//! CLI command implementations

mod resolve;
pub mod style;

pub use resolve::{ResolveOptions, run_resolve};

use async_trait::async_trait;
use indicatif::ProgressBar;
use mergewatch::resolver::ProgressCallback;

/// Progress reporter that feeds resolver messages into a spinner
pub struct SpinnerProgress {
    bar: ProgressBar,
}

impl SpinnerProgress {
    /// Wrap an existing spinner
    pub const fn new(bar: ProgressBar) -> Self {
        Self { bar }
    }
}

#[async_trait]
impl ProgressCallback for SpinnerProgress {
    async fn on_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }
}
