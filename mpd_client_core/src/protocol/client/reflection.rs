//! Reflection commands describing the server's capabilities

use super::MpdClient;
use crate::protocol::error::Result;
use crate::protocol::messages::{Command, Record};

impl MpdClient {
    /// Command names the current connection may use
    pub async fn commands(&mut self) -> Result<Vec<String>> {
        self.command_values(Command::new("commands")).await
    }

    /// Command names the current connection may not use
    pub async fn notcommands(&mut self) -> Result<Vec<String>> {
        self.command_values(Command::new("notcommands")).await
    }

    /// Tag types the server knows about
    pub async fn tagtypes(&mut self) -> Result<Vec<String>> {
        self.command_values(Command::new("tagtypes")).await
    }

    /// URL schemes the server can handle
    pub async fn urlhandlers(&mut self) -> Result<Vec<String>> {
        self.command_values(Command::new("urlhandlers")).await
    }

    /// Records of available decoder plugins and their suffixes
    pub async fn decoders(&mut self) -> Result<Vec<Record>> {
        self.command_records(Command::new("decoders")).await
    }
}
