//! Transport abstraction
//!
//! The protocol core only needs a bidirectional byte stream with whole-buffer
//! writes and line-based reads, plus a way to open new streams for
//! reconnection. Both sides of that contract are traits so tests can drive
//! the transaction engine with a scripted transport.

pub mod tcp;

pub use tcp::{TcpConnector, TcpTransport};

use crate::protocol::error::Result;
use async_trait::async_trait;

/// A connected byte stream carrying the MPD protocol
///
/// Implementations must report a peer close as `ProtocolError::Closed` and
/// every other failure as `ProtocolError::Io`; the transaction engine's
/// reconnect policy depends on that distinction.
#[async_trait]
pub trait Transport: Send + std::fmt::Debug {
    /// Write the whole buffer to the stream
    async fn write_all(&mut self, bytes: &[u8]) -> Result<()>;

    /// Read one line, without its trailing newline
    async fn read_line(&mut self) -> Result<String>;
}

/// Factory for transports, the seam where reconnection opens fresh streams
#[async_trait]
pub trait Connector: Send + Sync + std::fmt::Debug {
    /// Open a new transport to the given host and port
    async fn connect(&self, host: &str, port: u16) -> Result<Box<dyn Transport>>;
}
