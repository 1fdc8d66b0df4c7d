//! TCP line transport
//!
//! This module provides the production transport: a TCP stream with a
//! buffered reader for the newline-delimited replies MPD sends.

use crate::protocol::error::{ProtocolError, Result};
use async_trait::async_trait;
use log::trace;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

use super::{Connector, Transport};

/// TCP transport with buffered line reads
#[derive(Debug)]
pub struct TcpTransport {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl TcpTransport {
    /// Open a TCP connection to the given host and port
    pub async fn connect(host: &str, port: u16) -> Result<Self> {
        trace!("Opening TCP connection to {host}:{port}");
        let stream = TcpStream::connect((host, port))
            .await
            .map_err(ProtocolError::Io)?;
        let (read_half, write_half) = stream.into_split();

        Ok(Self {
            reader: BufReader::new(read_half),
            writer: write_half,
        })
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer
            .write_all(bytes)
            .await
            .map_err(ProtocolError::from_io)?;
        self.writer
            .flush()
            .await
            .map_err(ProtocolError::from_io)?;
        Ok(())
    }

    async fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .await
            .map_err(ProtocolError::from_io)?;

        // EOF: the server closed the connection
        if read == 0 {
            return Err(ProtocolError::Closed);
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Connector producing `TcpTransport` streams
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

#[async_trait]
impl Connector for TcpConnector {
    async fn connect(&self, host: &str, port: u16) -> Result<Box<dyn Transport>> {
        Ok(Box::new(TcpTransport::connect(host, port).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_read_line_strips_line_ending() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            stream.write_all(b"OK MPD 0.23.5\r\nstatus line\n").await.unwrap();
        });

        let mut transport = TcpTransport::connect("127.0.0.1", addr.port()).await.unwrap();
        assert_eq!(transport.read_line().await.unwrap(), "OK MPD 0.23.5");
        assert_eq!(transport.read_line().await.unwrap(), "status line");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_read_line_reports_eof_as_closed() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            drop(stream);
        });

        let mut transport = TcpTransport::connect("127.0.0.1", addr.port()).await.unwrap();
        server.await.unwrap();

        let err = transport.read_line().await.unwrap_err();
        assert!(err.is_closed());
    }

    #[tokio::test]
    async fn test_connect_refused_is_io_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = TcpTransport::connect("127.0.0.1", addr.port()).await.unwrap_err();
        assert!(matches!(err, ProtocolError::Io(_)));
    }
}
