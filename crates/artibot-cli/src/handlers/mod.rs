//! Command handlers.
//!
//! Handlers are thin: they read terminal input, hand chat messages to
//! [`dispatch::respond`] and print the replies. Promotion and listing logic
//! lives in `artibot-core`.

pub mod config;
pub mod dispatch;
pub mod help;
pub mod say;
pub mod shell;
