//! Domain types for artifact promotion.
//!
//! These are pure data types with no infrastructure dependencies.

mod identity;
mod promotion;
mod repository;

pub use identity::ChatUser;
pub use promotion::{
    PROMOTION_COMMENT, PROMOTION_STATUS, PromotionOutcome, PromotionRequest, STABLE_REPO,
    artifact_path, browse_url,
};
pub use repository::RepositoryList;
