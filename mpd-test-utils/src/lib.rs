//! Test utilities for the MPD client
//!
//! This crate provides a scripted mock transport with failure injection and
//! builders for reply line sequences, for testing the protocol core without
//! a running daemon.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::ReplyBuilder;
pub use mocks::{ScriptedConnector, ScriptedTransport};
