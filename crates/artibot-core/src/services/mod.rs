//! Core services - the application's business logic layer.
//!
//! Services here are pure orchestrators over the `ArtifactoryPort`; they
//! don't know about HTTP, chat platforms or where settings come from.

mod handler;
mod promotion;
mod repositories;

#[cfg(test)]
pub(crate) mod testing;

pub use handler::ArtifactoryHandler;
pub use promotion::PromotionService;
pub use repositories::RepositoryService;
