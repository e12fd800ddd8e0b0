//! Chat reply templates.

use crate::domain::{PromotionOutcome, PromotionRequest, RepositoryList, STABLE_REPO};

/// Reply for a finished promotion attempt.
///
/// `endpoint` is only shown on failure, so operators know which server
/// produced the messages.
pub fn promotion_reply(
    request: &PromotionRequest,
    outcome: &PromotionOutcome,
    endpoint: &str,
) -> String {
    match outcome {
        PromotionOutcome::Success { browsable_url, .. } => format!(
            ":metal: :ice_cream: *{project}* *{version}* has been successfully promoted to *{STABLE_REPO}*!\n\
             \n\
             You can view the promoted artifacts at:\n\
             {browsable_url}\n",
            project = request.project,
            version = request.version,
        ),
        PromotionOutcome::Failure { messages } => format!(
            ":scream: :skull: There was an error promoting *{project}* *{version}* to *{STABLE_REPO}*!\n\
             \n\
             Full error message from {endpoint}:\n\
             \n\
             ```{joined}```\n",
            project = request.project,
            version = request.version,
            joined = messages.join("\n"),
        ),
    }
}

/// Reply for the repository listing.
pub fn repositories_reply(repositories: &RepositoryList) -> String {
    format!("Artifact repositories: {repositories}")
}
