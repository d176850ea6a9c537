//! Session credential providers consulted by the search page before every submission.

use anyhow::Result;
use async_trait::async_trait;
use storage::Storage;

/// Read-only source of the bearer token. The search page never writes or refreshes it.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn session_token(&self) -> Result<Option<String>>;
}

/// Reads `sessionToken` from persistent client storage.
#[derive(Clone)]
pub struct StorageCredentialProvider {
    storage: Storage,
}

impl StorageCredentialProvider {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl CredentialProvider for StorageCredentialProvider {
    async fn session_token(&self) -> Result<Option<String>> {
        self.storage.session_token().await
    }
}

#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    token: Option<String>,
}

impl StaticCredentialProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn session_token(&self) -> Result<Option<String>> {
        Ok(self.token.clone())
    }
}

pub struct MissingCredentialProvider;

#[async_trait]
impl CredentialProvider for MissingCredentialProvider {
    async fn session_token(&self) -> Result<Option<String>> {
        Ok(None)
    }
}
