//! Ordered secret resolution.

use crate::providers::{EnvProvider, FileProvider, SecretProvider};
use ember_core::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error};

/// Resolves secrets by trying an ordered list of providers; the first hit
/// wins.
///
/// Resolution is total: every failure mode is logged and collapses to
/// `None`, nothing is raised to the caller. Each call performs a fresh
/// lookup; values are never cached.
pub struct SecretResolver {
    providers: Vec<Arc<dyn SecretProvider>>,
}

impl SecretResolver {
    pub fn new(providers: Vec<Arc<dyn SecretProvider>>) -> Self {
        Self { providers }
    }

    /// Environment first, then the `private/` file store.
    pub fn with_default_providers() -> Self {
        Self::with_secrets_dir(FileProvider::DEFAULT_DIR)
    }

    /// Environment first, then per-key files under `dir`.
    pub fn with_secrets_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(vec![
            Arc::new(EnvProvider),
            Arc::new(FileProvider::new(dir)),
        ])
    }

    /// Look up `key`, returning its value or `None`.
    pub async fn resolve(&self, key: &str) -> Option<String> {
        if key.is_empty() {
            error!("{}", Error::SecretNotProvided);
            return None;
        }

        for provider in &self.providers {
            match provider.get(key).await {
                Ok(secret) => {
                    debug!(key, provider = provider.name(), "secret resolved");
                    return Some(secret.value);
                }
                Err(Error::SecretNotFound(_)) => continue,
                Err(e) => {
                    // Read failures are logged distinctly but still fall
                    // through to the next provider.
                    error!(key, provider = provider.name(), "{e}");
                }
            }
        }

        error!(key, "secret not found");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn environment_wins_over_file_store() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("EMBER_TEST_SHADOWED"), "from-file").unwrap();
        // SAFETY: test-local variable name, not read concurrently elsewhere
        unsafe { std::env::set_var("EMBER_TEST_SHADOWED", "from-env") };

        let resolver = SecretResolver::with_secrets_dir(dir.path());
        assert_eq!(
            resolver.resolve("EMBER_TEST_SHADOWED").await.as_deref(),
            Some("from-env")
        );
    }

    #[tokio::test]
    async fn falls_back_to_file_store() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ember_test_file_only"), "s3cret\n").unwrap();

        let resolver = SecretResolver::with_secrets_dir(dir.path());
        assert_eq!(
            resolver.resolve("ember_test_file_only").await.as_deref(),
            Some("s3cret")
        );
    }

    #[tokio::test]
    async fn empty_key_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = SecretResolver::with_secrets_dir(dir.path());
        assert_eq!(resolver.resolve("").await, None);
    }

    #[tokio::test]
    async fn unknown_key_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = SecretResolver::with_secrets_dir(dir.path());
        assert_eq!(resolver.resolve("ember_test_absent").await, None);
    }
}
