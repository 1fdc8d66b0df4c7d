//! Command encoding and response parsing
//!
//! This module provides the wire-level message types of the MPD protocol:
//! outbound commands as space-joined token sequences, and inbound reply
//! bodies decoded into one of four shapes.

pub mod command;
pub mod response;

pub use command::Command;
pub use response::{Record, Reply, ResponseParser, ResponseShape};

/// Separator between a key and its value in structured reply lines
pub const PAIR_SEPARATOR: &str = ": ";
