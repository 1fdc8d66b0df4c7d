//! Protocol-specific error types
//!
//! This module defines error types for the MPD protocol implementation.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Protocol-specific error types
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Network I/O error other than the peer closing the connection
    #[error("Network I/O error: {0}")]
    Io(#[source] io::Error),

    /// The server closed the connection (EOF, broken pipe, reset)
    #[error("Connection closed by server")]
    Closed,

    /// Not connected to the server
    #[error("Not connected to MPD server")]
    NotConnected,

    /// Reconnection attempt failed
    #[error("Reconnect failed: {0}")]
    Reconnect(#[source] Box<ProtocolError>),

    /// MPD rejected the command with an `ACK` line
    #[error("{0}")]
    Server(AckError),

    /// Malformed greeting line on connect
    #[error("Malformed server greeting: {line}")]
    Greeting { line: String },

    /// A reply did not carry the shape the caller asked for
    #[error("Invalid reply: expected {expected}, got {actual}")]
    UnexpectedReply { expected: String, actual: String },
}

impl ProtocolError {
    /// Create a server error from a raw `ACK` line
    pub fn server(line: impl Into<String>) -> Self {
        Self::Server(AckError::parse(line.into()))
    }

    /// Create a greeting error
    pub fn greeting(line: impl Into<String>) -> Self {
        Self::Greeting { line: line.into() }
    }

    /// Create an unexpected reply error
    pub fn unexpected_reply(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::UnexpectedReply {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Wrap a reconnect failure
    pub fn reconnect(source: ProtocolError) -> Self {
        Self::Reconnect(Box::new(source))
    }

    /// Check whether this error signals that the peer closed the
    /// connection, the one condition the transaction engine may answer
    /// with a reconnect
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Classify an I/O error: peer-close conditions map to `Closed`,
    /// everything else stays an I/O error
    pub fn from_io(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::BrokenPipe
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::UnexpectedEof => Self::Closed,
            _ => Self::Io(err),
        }
    }
}

/// A decoded `ACK` error line
///
/// The raw line is kept verbatim and is what `Display` yields; the
/// bracketed error code, command-list index, and failing command name are
/// parsed best-effort from the `ACK [code@index] {command} message` format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AckError {
    raw: String,
    code: Option<u16>,
    index: Option<u32>,
    command: Option<String>,
    message: String,
}

impl AckError {
    /// Decode an `ACK` line, keeping the raw text regardless of whether
    /// the structured fields parse
    pub fn parse(raw: String) -> Self {
        let rest = raw.strip_prefix(crate::protocol::ERROR_PREFIX).unwrap_or(&raw);
        let rest = rest.trim_start();

        let mut code = None;
        let mut index = None;
        let mut command = None;
        let mut message = rest.to_string();

        if let Some(bracketed) = rest.strip_prefix('[')
            && let Some(close) = bracketed.find(']')
        {
            let (inner, tail) = (&bracketed[..close], &bracketed[close + 1..]);
            if let Some((code_str, index_str)) = inner.split_once('@') {
                code = code_str.parse().ok();
                index = index_str.parse().ok();
            }

            let tail = tail.trim_start();
            if let Some(braced) = tail.strip_prefix('{')
                && let Some(close) = braced.find('}')
            {
                let name = &braced[..close];
                if !name.is_empty() {
                    command = Some(name.to_string());
                }
                message = braced[close + 1..].trim_start().to_string();
            } else {
                message = tail.to_string();
            }
        }

        Self {
            raw,
            code,
            index,
            command,
            message,
        }
    }

    /// The complete error line as received from the server
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The numeric error code, if the line followed the standard format
    pub fn code(&self) -> Option<u16> {
        self.code
    }

    /// The command-list index, if the line followed the standard format
    pub fn index(&self) -> Option<u32> {
        self.index
    }

    /// The name of the failing command, if present
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// The human-readable error description
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
