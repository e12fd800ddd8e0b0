#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultArtifactoryClient is meant to be used through the ArtifactoryPort
// trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultArtifactoryClient;

// Configuration
pub use config::{ArtifactoryClientConfig, ProxyConfig};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
