//! URL construction helpers for the Artifactory REST API.
//!
//! Pure functions, so every call builds its URL the same way. Tokens taken
//! from user input are appended as single, percent-encoded path segments.

use url::Url;

use crate::error::{ArtifactoryError, ArtifactoryResult};

/// Parse an endpoint into a base URL ending in `/`, so relative joins keep
/// any context path (e.g. `/artifactory`).
pub fn normalize_base_url(endpoint: &str) -> ArtifactoryResult<Url> {
    let trimmed = endpoint.trim().trim_end_matches('/');
    Ok(Url::parse(&format!("{trimmed}/"))?)
}

/// Append `segments` to `base`, one path segment each.
///
/// `.` and `..` cannot be sent as literal segments, so they are rejected.
fn join(base: &Url, segments: &[&str]) -> ArtifactoryResult<Url> {
    if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
        return Err(ArtifactoryError::DotSegment((*dot).to_string()));
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| ArtifactoryError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// `GET /api/build/{name}/{number}`
pub fn build_info_url(base: &Url, name: &str, number: &str) -> ArtifactoryResult<Url> {
    join(base, &["api", "build", name, number])
}

/// `POST /api/build/promote/{name}/{number}`
pub fn build_promote_url(base: &Url, name: &str, number: &str) -> ArtifactoryResult<Url> {
    join(base, &["api", "build", "promote", name, number])
}

/// `GET /api/repositories`
pub fn repositories_url(base: &Url) -> ArtifactoryResult<Url> {
    join(base, &["api", "repositories"])
}
