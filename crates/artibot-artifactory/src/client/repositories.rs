//! Repository listing.

use crate::error::ArtifactoryResult;
use crate::http::HttpBackend;
use crate::models::RepositoryEntry;
use crate::url::repositories_url;

use super::ArtifactoryClient;

impl<B: HttpBackend> ArtifactoryClient<B> {
    /// Fetch every repository, in server order.
    pub(crate) async fn get_repositories(&self) -> ArtifactoryResult<Vec<RepositoryEntry>> {
        let url = repositories_url(&self.base_url)?;
        self.backend.get_json(&url).await
    }
}
