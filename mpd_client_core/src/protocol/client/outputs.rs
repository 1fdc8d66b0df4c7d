//! Audio output commands

use super::MpdClient;
use crate::protocol::error::Result;
use crate::protocol::messages::{Command, Record};

impl MpdClient {
    /// Records of the configured audio outputs
    pub async fn outputs(&mut self) -> Result<Vec<Record>> {
        self.command_records(Command::new("outputs")).await
    }

    /// Enable the output with the given id
    pub async fn enableoutput(&mut self, id: u32) -> Result<()> {
        self.command_ok(Command::new("enableoutput").arg(id)).await
    }

    /// Disable the output with the given id
    pub async fn disableoutput(&mut self, id: u32) -> Result<()> {
        self.command_ok(Command::new("disableoutput").arg(id)).await
    }

    /// Toggle the output with the given id
    pub async fn toggleoutput(&mut self, id: u32) -> Result<()> {
        self.command_ok(Command::new("toggleoutput").arg(id)).await
    }
}
