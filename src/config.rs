//! Configuration for mergewatch
//!
//! The auth token comes from the `GITHUB_TOKEN` environment variable,
//! falling back to the config file. Retry constants can be set in the
//! config file and overridden per-invocation on the command line.

use crate::error::{Error, Result};
use crate::resolver::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable consulted for the auth token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Directory name under the platform config dir
const CONFIG_DIR: &str = "mergewatch";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// On-disk configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Auth token for the GitHub API (env var takes precedence)
    pub token: Option<String>,
    /// Retry defaults
    #[serde(default)]
    pub retry: RetrySection,
}

/// Retry settings from the config file
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RetrySection {
    /// Retries allowed after the initial query
    pub max_retries: Option<u32>,
    /// Base backoff in seconds (doubles on each retry)
    pub base_delay_secs: Option<u64>,
}

/// Path to the user config file, if a config directory exists for this platform
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from the given path
///
/// Returns the default `Config` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    Ok(config)
}

/// Load configuration from the default location
pub fn load_default_config() -> Result<Config> {
    config_path().map_or_else(|| Ok(Config::default()), |path| load_config(&path))
}

impl Config {
    /// Resolve the auth token: environment variable first, then config file
    pub fn resolve_token(&self, env_token: Option<String>) -> Result<String> {
        env_token
            .filter(|t| !t.is_empty())
            .or_else(|| self.token.clone())
            .ok_or_else(|| {
                Error::Config(format!(
                    "no auth token: set {TOKEN_ENV_VAR} or add `token` to the config file"
                ))
            })
    }

    /// Build the retry policy: CLI overrides beat config values beat defaults
    pub fn retry_policy(
        &self,
        max_retries: Option<u32>,
        base_delay_secs: Option<u64>,
    ) -> RetryPolicy {
        let defaults = RetryPolicy::default();
        RetryPolicy::new(
            max_retries
                .or(self.retry.max_retries)
                .unwrap_or(defaults.max_retries),
            base_delay_secs
                .or(self.retry.base_delay_secs)
                .map_or(defaults.base_delay, Duration::from_secs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join("config.toml")).unwrap();
        assert!(config.token.is_none());
        assert!(config.retry.max_retries.is_none());
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "token = \"ghp_test\"\n\n[retry]\nmax_retries = 3\nbase_delay_secs = 2\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.token.as_deref(), Some("ghp_test"));
        assert_eq!(config.retry.max_retries, Some(3));
        assert_eq!(config.retry.base_delay_secs, Some(2));
    }

    #[test]
    fn test_load_config_without_retry_section() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "token = \"ghp_test\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.token.as_deref(), Some("ghp_test"));
        assert!(config.retry.max_retries.is_none());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "token = [not toml").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_env_token_beats_file_token() {
        let config = Config {
            token: Some("from-file".to_string()),
            retry: RetrySection::default(),
        };
        let token = config.resolve_token(Some("from-env".to_string())).unwrap();
        assert_eq!(token, "from-env");
    }

    #[test]
    fn test_empty_env_token_falls_back_to_file() {
        let config = Config {
            token: Some("from-file".to_string()),
            retry: RetrySection::default(),
        };
        let token = config.resolve_token(Some(String::new())).unwrap();
        assert_eq!(token, "from-file");
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let config = Config::default();
        let err = config.resolve_token(None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_retry_policy_precedence() {
        let config = Config {
            token: None,
            retry: RetrySection {
                max_retries: Some(3),
                base_delay_secs: Some(2),
            },
        };

        // CLI overrides beat config
        let policy = config.retry_policy(Some(7), Some(1));
        assert_eq!(policy.max_retries, 7);
        assert_eq!(policy.base_delay, Duration::from_secs(1));

        // Config beats built-in defaults
        let policy = config.retry_policy(None, None);
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.base_delay, Duration::from_secs(2));

        // Built-in defaults when nothing is set
        let policy = Config::default().retry_policy(None, None);
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.base_delay, Duration::from_secs(5));
    }
}
