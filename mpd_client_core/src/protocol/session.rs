//! Session lifecycle management
//!
//! A session owns at most one live transport handle plus the parameters
//! needed to open a fresh one. Connecting consumes the `OK MPD <version>`
//! greeting the server sends first; leaving it in the stream would
//! desynchronize the first transaction. Reconnection replaces the handle
//! wholesale and never recurses; the decision of *when* to reconnect
//! belongs to the transaction engine.

use log::{debug, warn};

use crate::config::ClientConfig;
use crate::protocol::error::{ProtocolError, Result};
use crate::protocol::transport::{Connector, TcpConnector, Transport};
use crate::protocol::{ERROR_PREFIX, GREETING_PREFIX, TERMINATOR};

/// An MPD session: connection parameters plus the live transport handle
#[derive(Debug)]
pub struct Session {
    connector: Box<dyn Connector>,
    host: String,
    port: u16,
    reconnect_enabled: bool,
    password: Option<String>,
    transport: Option<Box<dyn Transport>>,
    server_version: Option<String>,
}

impl Session {
    /// Connect to the server over TCP
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        Self::connect_with(Box::new(TcpConnector), config).await
    }

    /// Connect using a custom connector, the seam tests use to inject a
    /// scripted transport
    pub async fn connect_with(
        connector: Box<dyn Connector>,
        config: &ClientConfig,
    ) -> Result<Self> {
        let mut session = Self {
            connector,
            host: config.host.clone(),
            port: config.port,
            reconnect_enabled: config.reconnect,
            password: config.password.clone(),
            transport: None,
            server_version: None,
        };
        session.open().await?;
        Ok(session)
    }

    /// Discard any existing transport and open a fresh one against the
    /// stored host and port
    ///
    /// Always ends with either a live handle or a `Reconnect` error; at
    /// most one attempt, no recursion.
    pub async fn reconnect(&mut self) -> Result<()> {
        debug!("Reconnecting to {}:{}", self.host, self.port);
        self.transport = None;
        self.open().await.map_err(|e| {
            warn!("Reconnect to {}:{} failed: {e}", self.host, self.port);
            ProtocolError::reconnect(e)
        })
    }

    /// Dial, consume the greeting, and authenticate if configured
    async fn open(&mut self) -> Result<()> {
        let mut transport = self.connector.connect(&self.host, self.port).await?;

        let greeting = transport.read_line().await?;
        let Some(version) = greeting.strip_prefix(GREETING_PREFIX) else {
            return Err(ProtocolError::greeting(greeting));
        };
        debug!("Connected to MPD {version} at {}:{}", self.host, self.port);
        self.server_version = Some(version.to_string());

        if let Some(password) = self.password.clone() {
            Self::authenticate(transport.as_mut(), &password).await?;
        }

        self.transport = Some(transport);
        Ok(())
    }

    /// Send `password` on a freshly opened transport and check the reply
    async fn authenticate(transport: &mut dyn Transport, password: &str) -> Result<()> {
        let line = crate::protocol::Command::new("password")
            .arg(password)
            .encode();
        transport.write_all(line.as_bytes()).await?;

        let reply = transport.read_line().await?;
        if reply == TERMINATOR {
            Ok(())
        } else if reply.starts_with(ERROR_PREFIX) {
            Err(ProtocolError::server(reply))
        } else {
            Err(ProtocolError::unexpected_reply(TERMINATOR, reply))
        }
    }

    /// The protocol version announced in the server greeting
    pub fn server_version(&self) -> Option<&str> {
        self.server_version.as_deref()
    }

    /// Whether the transaction engine may reconnect and retry once when
    /// the server closes the connection mid-transaction
    pub fn reconnect_enabled(&self) -> bool {
        self.reconnect_enabled
    }

    /// Whether a live transport handle is present
    pub fn is_connected(&self) -> bool {
        self.transport.is_some()
    }

    /// Borrow the live transport, or report the session as disconnected
    pub fn transport_mut(&mut self) -> Result<&mut dyn Transport> {
        match self.transport.as_mut() {
            Some(transport) => Ok(transport.as_mut()),
            None => Err(ProtocolError::NotConnected),
        }
    }

    /// Drop the transport handle without touching the wire
    pub fn close(&mut self) {
        self.transport = None;
    }
}
