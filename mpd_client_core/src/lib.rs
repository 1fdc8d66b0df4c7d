//! MPD Client Core Library
//!
//! This is the core library for the MPD client, implementing the line-oriented
//! MPD protocol: connection and session management, the command/response
//! transaction loop, response parsing, and the typed command catalog.

pub mod config;
pub mod protocol;

// Re-export main types
pub use config::ClientConfig;
pub use protocol::{
    AckError, Command, MpdClient, ProtocolError, Record, Reply, ResponseParser, ResponseShape,
    Result, Session,
};
pub use protocol::transport::{Connector, TcpConnector, Transport};
