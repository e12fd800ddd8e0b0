//! Repository service - lists repository keys.

use std::sync::Arc;

use tracing::debug;

use crate::domain::RepositoryList;
use crate::ports::{ArtifactoryPort, CoreError};

/// Service for repository listing.
///
/// Thin facade over the port: every call fetches the full list again.
pub struct RepositoryService {
    client: Arc<dyn ArtifactoryPort>,
}

impl RepositoryService {
    /// Create a new repository service over the given client.
    pub fn new(client: Arc<dyn ArtifactoryPort>) -> Self {
        Self { client }
    }

    /// All repository keys, sorted ascending.
    pub async fn list(&self) -> Result<RepositoryList, CoreError> {
        let repositories = self.client.list_repositories().await?;
        debug!(count = repositories.len(), "Fetched repositories");
        Ok(RepositoryList::from_keys(
            repositories.into_iter().map(|r| r.key),
        ))
    }
}
