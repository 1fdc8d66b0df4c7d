//! High-level MPD client: transaction engine and command catalog
//!
//! The transaction engine serializes a command, writes it to the session's
//! transport, collects reply lines until the `OK` terminator or an `ACK`
//! error line, and decodes the body per the requested shape. When the
//! server has silently closed the connection the engine reconnects and
//! retries the whole transaction exactly once; the retry bound is an
//! explicit loop, not recursion.
//!
//! The protocol is strictly half-duplex, one outstanding transaction per
//! session. `transact` takes `&mut self`, so the borrow checker enforces
//! that; no internal locking exists. Callers sharing a client across tasks
//! must serialize access themselves.

mod connection;
mod database;
mod outputs;
mod playback;
mod playlists;
mod queue;
mod reflection;
mod stickers;

use log::{debug, trace};

use crate::config::ClientConfig;
use crate::protocol::error::{ProtocolError, Result};
use crate::protocol::messages::{Command, Record, Reply, ResponseParser, ResponseShape};
use crate::protocol::session::Session;
use crate::protocol::transport::Connector;
use crate::protocol::{ERROR_PREFIX, TERMINATOR};

/// High-level MPD client
pub struct MpdClient {
    session: Session,
}

impl MpdClient {
    /// Connect to the server over TCP
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            session: Session::connect(config).await?,
        })
    }

    /// Connect using a custom connector
    pub async fn connect_with(
        connector: Box<dyn Connector>,
        config: &ClientConfig,
    ) -> Result<Self> {
        Ok(Self {
            session: Session::connect_with(connector, config).await?,
        })
    }

    /// The protocol version announced in the server greeting
    pub fn server_version(&self) -> Option<&str> {
        self.session.server_version()
    }

    /// Run one command/reply transaction
    ///
    /// On a closed-connection failure with reconnect enabled, the session
    /// is reconnected and the whole transaction retried once from the
    /// beginning; a second closed-connection failure propagates. Server
    /// `ACK` rejections are never retried.
    pub async fn transact(&mut self, command: &Command, shape: ResponseShape) -> Result<Reply> {
        let mut retried = false;
        loop {
            match self.attempt(command, shape).await {
                Err(err) if err.is_closed() && self.session.reconnect_enabled() && !retried => {
                    debug!(
                        "Connection lost during '{}', reconnecting for one retry",
                        command.name()
                    );
                    retried = true;
                    self.session.reconnect().await?;
                }
                other => return other,
            }
        }
    }

    /// One write-then-read attempt, no retry policy
    async fn attempt(&mut self, command: &Command, shape: ResponseShape) -> Result<Reply> {
        let encoded = command.encode();
        debug!("--> {}", encoded.trim_end());

        let transport = self.session.transport_mut()?;
        transport.write_all(encoded.as_bytes()).await?;

        let mut lines = Vec::new();
        loop {
            let line = transport.read_line().await?;
            trace!("<-- {line}");

            if line == TERMINATOR {
                break;
            }
            if line.starts_with(ERROR_PREFIX) {
                return Err(ProtocolError::server(line));
            }
            lines.push(line);
        }

        Ok(ResponseParser::parse(&lines, shape))
    }

    /// Send `close` and drop the connection
    ///
    /// The server replies with nothing and closes the stream, so no reply
    /// is read.
    pub async fn close(mut self) -> Result<()> {
        let encoded = Command::new("close").encode();
        debug!("--> close");
        self.session.transport_mut()?.write_all(encoded.as_bytes()).await?;
        self.session.close();
        Ok(())
    }

    // Typed wrappers used by the catalog; each catalog entry is a fixed
    // command-to-shape pairing, so the accessor on the reply cannot miss.

    pub(crate) async fn command_ok(&mut self, command: Command) -> Result<()> {
        self.transact(&command, ResponseShape::Line).await?;
        Ok(())
    }

    pub(crate) async fn command_map(&mut self, command: Command) -> Result<Record> {
        self.transact(&command, ResponseShape::Map).await?.into_map()
    }

    pub(crate) async fn command_values(&mut self, command: Command) -> Result<Vec<String>> {
        self.transact(&command, ResponseShape::List).await?.into_values()
    }

    pub(crate) async fn command_records(&mut self, command: Command) -> Result<Vec<Record>> {
        self.transact(&command, ResponseShape::RecordList)
            .await?
            .into_records()
    }
}
