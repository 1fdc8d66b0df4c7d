//! Connection-level commands: ping, password, idle

use super::MpdClient;
use crate::protocol::error::Result;
use crate::protocol::messages::Command;

impl MpdClient {
    /// No-op keepalive
    pub async fn ping(&mut self) -> Result<()> {
        self.command_ok(Command::new("ping")).await
    }

    /// Authenticate the connection
    pub async fn password(&mut self, password: &str) -> Result<()> {
        self.command_ok(Command::new("password").arg(password)).await
    }

    /// Block until something changes, returning the changed subsystem names
    ///
    /// This is an ordinary transaction that happens to be long-lived: the
    /// command is written and the reply read like any other, there is no
    /// background listener. Because the client is half-duplex and `idle`
    /// holds the `&mut self` borrow until the server replies, `noidle`
    /// cannot be interleaved on the same session; cancelling a pending
    /// `idle` requires a second connection (or dropping this future and
    /// reconnecting).
    pub async fn idle(&mut self, subsystems: &[&str]) -> Result<Vec<String>> {
        let mut cmd = Command::new("idle");
        for subsystem in subsystems {
            cmd = cmd.arg(subsystem);
        }
        self.command_values(cmd).await
    }

    /// Cancel a pending `idle`
    ///
    /// Only meaningful on a connection whose `idle` is still pending, which
    /// this half-duplex client cannot have on its own session (see
    /// [`MpdClient::idle`]). Issued between transactions the server rejects it.
    pub async fn noidle(&mut self) -> Result<()> {
        self.command_ok(Command::new("noidle")).await
    }
}
