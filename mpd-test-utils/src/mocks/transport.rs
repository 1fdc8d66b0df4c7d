//! Scripted transport and connector
//!
//! `ScriptedTransport` plays back a fixed sequence of read results and
//! write outcomes, recording everything the client writes.
//! `ScriptedConnector` hands out a queue of such transports, one per
//! connect call, which is how reconnect behavior is exercised: the first
//! transport fails mid-transaction, the second one carries the retry.

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mpd_client_core::protocol::error::{ProtocolError, Result};
use mpd_client_core::protocol::transport::{Connector, Transport};

/// One scripted read result
#[derive(Debug, Clone)]
enum ReadStep {
    Line(String),
    Closed,
    Error(io::ErrorKind),
}

/// One scripted write outcome
#[derive(Debug, Clone)]
enum WriteStep {
    Accept,
    Closed,
    Error(io::ErrorKind),
}

/// A transport that plays back a script
///
/// Reads pop from the read script; an exhausted script behaves like a
/// silently closed connection. Writes pop from the write script, defaulting
/// to acceptance when the script is exhausted; accepted writes are recorded.
#[derive(Debug)]
pub struct ScriptedTransport {
    reads: VecDeque<ReadStep>,
    write_steps: VecDeque<WriteStep>,
    writes: Arc<Mutex<Vec<String>>>,
}

impl Default for ScriptedTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedTransport {
    /// Create a transport with an empty script
    pub fn new() -> Self {
        Self {
            reads: VecDeque::new(),
            write_steps: VecDeque::new(),
            writes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append lines to the read script
    pub fn reads(mut self, lines: &[&str]) -> Self {
        for line in lines {
            self.reads.push_back(ReadStep::Line(line.to_string()));
        }
        self
    }

    /// Append owned lines to the read script
    pub fn reads_lines(mut self, lines: Vec<String>) -> Self {
        for line in lines {
            self.reads.push_back(ReadStep::Line(line));
        }
        self
    }

    /// Append a closed-connection read result
    pub fn read_closed(mut self) -> Self {
        self.reads.push_back(ReadStep::Closed);
        self
    }

    /// Append an I/O error read result
    pub fn read_error(mut self, kind: io::ErrorKind) -> Self {
        self.reads.push_back(ReadStep::Error(kind));
        self
    }

    /// Append an accepted write outcome
    pub fn write_ok(mut self) -> Self {
        self.write_steps.push_back(WriteStep::Accept);
        self
    }

    /// Append a closed-connection write outcome
    pub fn write_closed(mut self) -> Self {
        self.write_steps.push_back(WriteStep::Closed);
        self
    }

    /// Append an I/O error write outcome
    pub fn write_error(mut self, kind: io::ErrorKind) -> Self {
        self.write_steps.push_back(WriteStep::Error(kind));
        self
    }

    /// Handle to the recorded writes
    pub fn writes(&self) -> Arc<Mutex<Vec<String>>> {
        self.writes.clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        match self.write_steps.pop_front().unwrap_or(WriteStep::Accept) {
            WriteStep::Accept => {
                let text = String::from_utf8_lossy(bytes).into_owned();
                self.writes.lock().expect("writes lock").push(text);
                Ok(())
            }
            WriteStep::Closed => Err(ProtocolError::Closed),
            WriteStep::Error(kind) => Err(ProtocolError::Io(io::Error::new(kind, "scripted"))),
        }
    }

    async fn read_line(&mut self) -> Result<String> {
        match self.reads.pop_front().unwrap_or(ReadStep::Closed) {
            ReadStep::Line(line) => Ok(line),
            ReadStep::Closed => Err(ProtocolError::Closed),
            ReadStep::Error(kind) => Err(ProtocolError::Io(io::Error::new(kind, "scripted"))),
        }
    }
}

/// A connector handing out scripted transports in order
///
/// Once the queue is empty further connect calls fail with a refused
/// connection, which is how reconnect-failure paths are exercised.
#[derive(Debug)]
pub struct ScriptedConnector {
    transports: Mutex<VecDeque<ScriptedTransport>>,
    connects: Arc<AtomicUsize>,
}

impl ScriptedConnector {
    /// Create a connector that yields the given transports in order
    pub fn new(transports: Vec<ScriptedTransport>) -> Self {
        Self {
            transports: Mutex::new(transports.into()),
            connects: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle to the number of connect calls observed
    pub fn connect_count(&self) -> Arc<AtomicUsize> {
        self.connects.clone()
    }
}

#[async_trait]
impl Connector for ScriptedConnector {
    async fn connect(&self, _host: &str, _port: u16) -> Result<Box<dyn Transport>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        match self.transports.lock().expect("transports lock").pop_front() {
            Some(transport) => Ok(Box::new(transport)),
            None => Err(ProtocolError::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "no scripted transport left",
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_reads_then_closed() {
        let mut transport = ScriptedTransport::new().reads(&["a", "b"]);
        assert_eq!(transport.read_line().await.unwrap(), "a");
        assert_eq!(transport.read_line().await.unwrap(), "b");
        assert!(transport.read_line().await.unwrap_err().is_closed());
    }

    #[tokio::test]
    async fn test_scripted_write_failure_then_default_accept() {
        let mut transport = ScriptedTransport::new().write_closed();
        let writes = transport.writes();

        assert!(transport.write_all(b"ping\r\n").await.unwrap_err().is_closed());
        transport.write_all(b"pong\r\n").await.unwrap();
        assert_eq!(writes.lock().unwrap().as_slice(), ["pong\r\n"]);
    }

    #[tokio::test]
    async fn test_connector_hands_out_transports_in_order() {
        let first = ScriptedTransport::new().reads(&["one"]);
        let second = ScriptedTransport::new().reads(&["two"]);
        let connector = ScriptedConnector::new(vec![first, second]);
        let count = connector.connect_count();

        let mut t1 = connector.connect("localhost", 6600).await.unwrap();
        let mut t2 = connector.connect("localhost", 6600).await.unwrap();
        assert_eq!(t1.read_line().await.unwrap(), "one");
        assert_eq!(t2.read_line().await.unwrap(), "two");
        assert_eq!(count.load(Ordering::SeqCst), 2);

        let err = connector.connect("localhost", 6600).await.unwrap_err();
        assert!(matches!(err, ProtocolError::Io(_)));
    }
}
