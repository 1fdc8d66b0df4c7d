//! MPD protocol implementation
//!
//! This module implements the MPD line protocol with a modular architecture:
//! - `transport`: low-level TCP line transport and the connector seam
//! - `session`: connection lifecycle (connect, greeting, reconnect)
//! - `messages`: command encoding and response parsing
//! - `client`: the transaction engine and the typed command catalog

pub mod client;
pub mod error;
pub mod messages;
pub mod session;
pub mod transport;

// Re-export main types
pub use client::MpdClient;
pub use error::{AckError, ProtocolError, Result};
pub use messages::{Command, Record, Reply, ResponseParser, ResponseShape};
pub use session::Session;
pub use transport::{Connector, TcpConnector, Transport};

/// Default MPD server host
pub const DEFAULT_HOST: &str = "localhost";

/// Default MPD server port
pub const DEFAULT_PORT: u16 = 6600;

/// Terminator line ending a successful reply
pub const TERMINATOR: &str = "OK";

/// Prefix of the error line ending a failed reply
pub const ERROR_PREFIX: &str = "ACK";

/// Prefix of the greeting line sent by the server on connect
pub const GREETING_PREFIX: &str = "OK MPD ";
