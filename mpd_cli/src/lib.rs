//! MPD CLI library
//!
//! The CLI's reusable pieces, exposed for integration tests: configuration
//! loading and output formatting.

pub mod config;
pub mod output;
