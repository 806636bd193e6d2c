//! Secret provider trait and implementations.

use async_trait::async_trait;
use ember_core::{Error, Result};
use std::path::PathBuf;

/// A resolved secret value.
#[derive(Debug, Clone)]
pub struct SecretValue {
    pub value: String,
}

/// Trait for secret providers.
#[async_trait]
pub trait SecretProvider: Send + Sync {
    /// Get a secret by key.
    async fn get(&self, key: &str) -> Result<SecretValue>;

    /// Check if a secret exists.
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Provider name for logging.
    fn name(&self) -> &str;
}

/// Environment variable secret provider.
///
/// The variable name is the key, verbatim. A present-but-empty variable
/// counts as found.
#[derive(Default)]
pub struct EnvProvider;

#[async_trait]
impl SecretProvider for EnvProvider {
    async fn get(&self, key: &str) -> Result<SecretValue> {
        std::env::var(key)
            .map(|value| SecretValue { value })
            .map_err(|_| Error::SecretNotFound(key.to_string()))
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(std::env::var(key).is_ok())
    }

    fn name(&self) -> &str {
        "env"
    }
}

/// File-backed secret provider: one file per key under the secrets
/// directory, value = trimmed file contents. Reads fresh on every call.
pub struct FileProvider {
    dir: PathBuf,
}

impl FileProvider {
    pub const DEFAULT_DIR: &'static str = "private";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Default for FileProvider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIR)
    }
}

#[async_trait]
impl SecretProvider for FileProvider {
    async fn get(&self, key: &str) -> Result<SecretValue> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(SecretValue {
                value: contents.trim().to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::SecretNotFound(key.to_string()))
            }
            Err(e) => Err(Error::SecretRead {
                name: key.to_string(),
                source: e,
            }),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(tokio::fs::try_exists(self.path_for(key)).await?)
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn env_provider_reads_variable() {
        // SAFETY: test-local variable name, not read concurrently elsewhere
        unsafe { std::env::set_var("EMBER_TEST_ENV_SECRET", "from-env") };
        let provider = EnvProvider;

        let value = provider.get("EMBER_TEST_ENV_SECRET").await.unwrap();
        assert_eq!(value.value, "from-env");

        assert!(provider.exists("EMBER_TEST_ENV_SECRET").await.unwrap());
        assert!(!provider.exists("EMBER_TEST_ENV_MISSING").await.unwrap());
    }

    #[tokio::test]
    async fn env_provider_empty_value_counts_as_found() {
        // SAFETY: test-local variable name, not read concurrently elsewhere
        unsafe { std::env::set_var("EMBER_TEST_ENV_EMPTY", "") };
        let provider = EnvProvider;

        let value = provider.get("EMBER_TEST_ENV_EMPTY").await.unwrap();
        assert_eq!(value.value, "");
    }

    #[tokio::test]
    async fn file_provider_trims_contents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("api_key"), "  hunter2\n").unwrap();
        let provider = FileProvider::new(dir.path());

        let value = provider.get("api_key").await.unwrap();
        assert_eq!(value.value, "hunter2");
        assert!(provider.exists("api_key").await.unwrap());
    }

    #[tokio::test]
    async fn file_provider_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileProvider::new(dir.path());

        let err = provider.get("missing").await.unwrap_err();
        assert!(matches!(err, Error::SecretNotFound(_)));
        assert!(!provider.exists("missing").await.unwrap());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn file_provider_distinguishes_read_errors() {
        // A directory in place of the secret file fails with something
        // other than NotFound.
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("api_key")).unwrap();
        let provider = FileProvider::new(dir.path());

        let err = provider.get("api_key").await.unwrap_err();
        assert!(matches!(err, Error::SecretRead { .. }));
    }
}
