//! Sticker (arbitrary per-object metadata) commands

use super::MpdClient;
use crate::protocol::error::{ProtocolError, Result};
use crate::protocol::messages::{Command, Record};

impl MpdClient {
    /// Read one sticker; the result is the `name=value` payload
    pub async fn sticker_get(&mut self, kind: &str, uri: &str, name: &str) -> Result<String> {
        let cmd = Command::new("sticker").arg("get").arg(kind).arg(uri).arg(name);
        let mut values = self.command_values(cmd).await?;
        values
            .pop()
            .ok_or_else(|| ProtocolError::unexpected_reply("sticker value", "empty reply"))
    }

    /// Set one sticker
    pub async fn sticker_set(
        &mut self,
        kind: &str,
        uri: &str,
        name: &str,
        value: &str,
    ) -> Result<()> {
        let cmd = Command::new("sticker")
            .arg("set")
            .arg(kind)
            .arg(uri)
            .arg(name)
            .arg(value);
        self.command_ok(cmd).await
    }

    /// Delete one sticker, or all stickers of the object when `name` is absent
    pub async fn sticker_delete(&mut self, kind: &str, uri: &str, name: Option<&str>) -> Result<()> {
        let cmd = Command::new("sticker").arg("delete").arg(kind).arg(uri).opt_arg(name);
        self.command_ok(cmd).await
    }

    /// All `name=value` stickers of an object
    pub async fn sticker_list(&mut self, kind: &str, uri: &str) -> Result<Vec<String>> {
        let cmd = Command::new("sticker").arg("list").arg(kind).arg(uri);
        self.command_values(cmd).await
    }

    /// Objects below `uri` carrying a sticker with the given name
    pub async fn sticker_find(&mut self, kind: &str, uri: &str, name: &str) -> Result<Vec<Record>> {
        let cmd = Command::new("sticker").arg("find").arg(kind).arg(uri).arg(name);
        self.command_records(cmd).await
    }
}
